// Match pipeline: vocabulary lookup, field extraction, scoring, advice
// templating, report assembly. Pure string transforms below the handler
// layer — no I/O, no shared mutable state.

pub mod advice;
pub mod handlers;
pub mod jd;
pub mod report;
pub mod resume;
pub mod scoring;
pub mod vocabulary;

mod checklist;
mod classification;
mod common;
mod folders;

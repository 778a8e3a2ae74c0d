mod case_vm;

pub use case_vm::{CaseIntent, CaseVm, DeskSnapshot, Notice, NoticeKind, Tint, open_case};

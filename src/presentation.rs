// src/presentation.rs

/// Display regions the controller toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    WaitingIndicator,
    StatusPanel,
    ErrorPanel,
    StdoutPanel,
    StderrPanel,
    RetvalDisplay,
    SignalDisplay,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::WaitingIndicator,
        Region::StatusPanel,
        Region::ErrorPanel,
        Region::StdoutPanel,
        Region::StderrPanel,
        Region::RetvalDisplay,
        Region::SignalDisplay,
    ];
}

/// Text fields the controller populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    StatusSummaryLabel,
    RetvalValue,
    SignalValue,
    TimeValue,
    StdoutText,
    StderrText,
    ErrorMessageText,
}

/// Whatever surface shows the outcome of a submission.
///
/// The controller only writes through this trait and never reads visual state back.
pub trait PresentationAdapter {
    fn show(&mut self, region: Region);

    fn hide(&mut self, region: Region);

    fn set_text(&mut self, field: Field, value: &str);

    fn set_visible(&mut self, region: Region, visible: bool) {
        if visible {
            self.show(region);
        } else {
            self.hide(region);
        }
    }
}

/// Source of the values a submission is built from. Read once per trigger.
pub trait InputSurface {
    fn code(&self) -> String;

    fn stdin(&self) -> String;
}

/// An input surface over values fixed up front.
#[derive(Debug, Clone, Default)]
pub struct StaticInput {
    pub code: String,
    pub stdin: String,
}

impl StaticInput {
    pub fn new(code: impl Into<String>, stdin: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            stdin: stdin.into(),
        }
    }
}

impl InputSurface for StaticInput {
    fn code(&self) -> String {
        self.code.clone()
    }

    fn stdin(&self) -> String {
        self.stdin.clone()
    }
}

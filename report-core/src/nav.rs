/// Open/closed state of the collapsible site navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

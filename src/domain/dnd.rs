/// Decides whether do-not-disturb may be switched on automatically.
///
/// While a focus feature (the running pomodoro) is in use, DND is only
/// enabled when the user has allowed automatic DND.
#[derive(Debug, Clone)]
pub struct DndManager {
    allow_auto_dnd: bool,
    feature_in_use: bool,
    dnd_on: bool,
}

impl DndManager {
    pub fn new(allow_auto_dnd: bool, feature_in_use: bool) -> Self {
        Self {
            allow_auto_dnd,
            feature_in_use,
            dnd_on: false,
        }
    }

    pub fn is_on(&self) -> bool {
        self.dnd_on
    }

    pub fn set_feature_in_use(&mut self, in_use: bool) {
        self.feature_in_use = in_use;
    }

    pub fn can_enable_dnd(&self) -> bool {
        !(self.feature_in_use && !self.allow_auto_dnd)
    }

    /// Try to turn DND on; returns the resulting state
    pub fn enable_dnd(&mut self) -> bool {
        self.dnd_on = self.can_enable_dnd();
        self.dnd_on
    }

    pub fn disable_dnd(&mut self) {
        self.dnd_on = false;
    }
}

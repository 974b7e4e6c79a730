/// Load lifecycle of an asynchronously fetched catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Loaded,
}

/// Actions that advance a resource through its lifecycle.
#[derive(Debug, Clone)]
pub enum ResourceAction<T> {
    Loading,
    /// Fetch resolved. `None` means a successful fetch with no payload.
    Loaded(Option<T>),
}

/// A fetched-dictionary wrapper with an idle -> loading -> loaded
/// state machine. There is no error state and no way back: a fetch
/// that never resolves leaves the resource in `Loading` forever.
#[derive(Debug, Clone)]
pub struct AsyncResource<T> {
    status: Status,
    data: Option<T>,
}

impl<T> Default for AsyncResource<T> {
    fn default() -> Self {
        Self {
            status: Status::Idle,
            data: None,
        }
    }
}

impl<T> AsyncResource<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The payload, gated on the lifecycle: `None` unless `Loaded`.
    pub fn data(&self) -> Option<&T> {
        match self.status {
            Status::Loaded => self.data.as_ref(),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.status == Status::Loaded
    }

    /// Reducer-style transition. Transitions only move forward;
    /// anything else leaves the state untouched.
    pub fn apply(&mut self, action: ResourceAction<T>) {
        match (self.status, action) {
            (Status::Idle, ResourceAction::Loading) => {
                self.status = Status::Loading;
            }
            (Status::Idle | Status::Loading, ResourceAction::Loaded(payload)) => {
                self.status = Status::Loaded;
                self.data = payload;
            }
            _ => {}
        }
    }
}

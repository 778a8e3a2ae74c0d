mod case;
mod login;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use case::CaseView;
pub use login::LoginView;
pub use state::{view_state_from_resource, ViewError, ViewState};

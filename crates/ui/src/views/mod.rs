mod assistant;
mod essays;
mod home;
mod quiz;
mod reference;
mod results;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assistant::AssistantView;
pub use essays::{EssayIntent, EssaysView};
pub use home::HomeView;
pub use quiz::{QuizIntent, QuizView};
pub use reference::{AboutView, StudyGuideView, WebsiteView};
pub use results::ResultsView;
pub use state::{ViewError, ViewState, view_state_from_resource};

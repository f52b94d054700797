//! UI Components
//!
//! Pages and the small pieces they share.

mod delete_confirm_button;
mod error_banner;
mod goals_page;
mod habits_page;
mod login_page;
mod nav_bar;
mod workouts_page;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use goals_page::GoalsPage;
pub use habits_page::HabitsPage;
pub use login_page::LoginPage;
pub use nav_bar::NavBar;
pub use workouts_page::WorkoutsPage;

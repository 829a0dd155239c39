mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod navbar;
pub use navbar::AppNavbar;

mod not_found;
pub use not_found::NotFound;

mod profile;
pub use profile::Profile;

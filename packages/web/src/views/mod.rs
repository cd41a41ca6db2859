mod home;
pub use home::Home;

mod play;
pub use play::Play;

mod signin;
pub use signin::SignIn;

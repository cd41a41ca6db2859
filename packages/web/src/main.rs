use dioxus::prelude::*;

use config::RuntimeConfig;
use views::{Home, Play, SignIn};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/play")]
    Play {},
    #[route("/signin")]
    SignIn {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    let config = RuntimeConfig::from_env();

    #[cfg(feature = "server")]
    init_tracing(&config);

    log_runtime_config(&config);
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing(config: &RuntimeConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.mode.default_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn log_runtime_config(config: &RuntimeConfig) {
    tracing::info!("{}", config.startup_line());
}

#[component]
fn App() -> Element {
    let id_token = use_signal(|| None::<String>);
    use_context_provider(|| id_token);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::LandingTheme {}
        ui::SessionBootstrap {}
        Router::<Route> {}
    }
}

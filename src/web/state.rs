use loginform::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}

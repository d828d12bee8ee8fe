use crate::db::OrmConn;

#[derive(Clone)]
pub struct AppState {
    pub orm: OrmConn,
    pub public_url: Option<String>,
}

impl AppState {
    pub fn new(orm: OrmConn) -> Self {
        Self {
            orm,
            public_url: None,
        }
    }

    pub fn with_public_url(mut self, public_url: Option<String>) -> Self {
        self.public_url = public_url;
        self
    }
}

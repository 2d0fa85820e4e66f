/// How to reach the game server's remote-console query port
#[derive(Clone)]
pub struct RconSettings {
    /// Absent means roster queries cannot be issued
    pub password: Option<String>,
    /// `host:port` as seen from inside the container
    pub address: String,
    /// Query tool executable inside the container
    pub binary: String,
}

impl std::fmt::Debug for RconSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RconSettings")
            .field("password", &self.password.as_ref().map(|_| crate::REDACTED))
            .field("address", &self.address)
            .field("binary", &self.binary)
            .finish()
    }
}

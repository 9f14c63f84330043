#[cfg(test)]
mod client {
    mod session;
    mod groups;
    mod posts;
}

// Live-service tests. They need a running service instance (set
// HUDDLE_API_BASE, default http://localhost:5000) with the test users
// below already signed up, so the whole module is ignored by default:
// cargo test --test apitests -- --ignored
#[cfg(test)]
pub(crate) mod common {
    use huddle::{Builder, Client};

    pub const ALICE: &str = "apitest_alice";
    pub const BOB  : &str = "apitest_bob";
    pub const PASSWORD: &str = "password";

    pub fn build_client() -> Client {
        Builder::new()
            .build()
            .unwrap()
    }

    pub async fn login_as(name: &str) -> Client {
        let mut client = build_client();
        client.log_in(name, PASSWORD).await.unwrap();
        client.bootstrap().await.unwrap();
        client
    }
}

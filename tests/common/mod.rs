#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Each test binary gets its own database file keyed by pid, so
        // concurrently running suites never share state.
        let db_path = std::env::temp_dir().join(format!("holocron-test-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&db_path);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/holocron-api");
        cmd.env("PORT", port.to_string())
            .env("DATABASE_URL", format!("sqlite://{}", db_path.display()))
            .env("JWT_SECRET", "holocron-test-secret")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// A registered, logged-in account for tests that need a bearer token.
pub struct Session {
    pub user_id: i64,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register a fresh account with a unique email and log in.
pub async fn open_session(client: &reqwest::Client, base_url: &str) -> Result<Session> {
    let email = unique_email();
    let password = "red-five-standing-by".to_string();

    let res = client
        .post(format!("{}/register", base_url))
        .json(&json!({
            "email": email,
            "first_name": "Test",
            "last_name": "Pilot",
            "password": password,
        }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "register failed with {}",
        res.status()
    );
    let body: Value = res.json().await?;
    let user_id = body["user"]["id"]
        .as_i64()
        .context("register response missing user id")?;

    let token = login(client, base_url, &email, &password).await?;

    Ok(Session { user_id, email, password, token })
}

pub async fn login(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<String> {
    let res = client
        .post(format!("{}/login", base_url))
        .json(&json!({"email": email, "password": password}))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "login failed with {}", res.status());
    let body: Value = res.json().await?;
    body["token"]
        .as_str()
        .map(str::to_string)
        .context("login response missing token")
}

/// Unique per process and per call, so parallel tests never collide on email.
pub fn unique_email() -> String {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("pilot-{}-{}@holocron.test", std::process::id(), n)
}

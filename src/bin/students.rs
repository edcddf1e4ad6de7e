//! Student registry service. Configure with HOST, PORT, BODY_LIMIT_BYTES and RUST_LOG (or a `.env` file).

use crud_demo::{init_tracing, load_from_env, serve, students_app, StudentState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env()?;
    init_tracing(&config);

    let app = students_app(StudentState::seeded(), &config);
    serve(app, &config).await
}

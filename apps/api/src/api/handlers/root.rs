/// Liveness check
///
/// GET /
pub async fn root() -> &'static str {
    "Game Hive Player API"
}

use crate::prelude::Result;

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz() -> Result<()> {
    tracing::debug!("service is healthy");
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::*;

    #[tokio::test]
    async fn probes_report_ok() {
        assert_eq!(livez().await.into_response().status(), StatusCode::OK);
        assert_eq!(healthz().await.into_response().status(), StatusCode::OK);
    }
}

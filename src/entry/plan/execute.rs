use chrono::Utc;

use perfctl::auth::AuthToken;
use perfctl::error::{AppError, AppResult};
use perfctl::http::{build_client, refresh_token, submit_test};
use perfctl::perf::{RunStage, build_payload, submission_query};

use super::types::PerfPlan;

pub(crate) async fn execute_plan(plan: PerfPlan) -> AppResult<()> {
    let PerfPlan {
        config,
        endpoints,
        token_path,
        connect_timeout,
        request_timeout,
        mut stage,
    } = plan;

    let payload = build_payload(&config, Utc::now()).map_err(|err| stage.fail(err))?;
    let cookies = AuthToken::load(&token_path)
        .and_then(|token| token.cookie_header())
        .map_err(|err| stage.fail(AppError::auth(err)))?;
    let client =
        build_client(connect_timeout, request_timeout).map_err(|err| stage.fail(err))?;

    tracing::info!("Initiating Performance test ...");
    let response = submit_test(
        &client,
        &endpoints.submit,
        &submission_query(&config),
        payload,
        cookies,
    )
    .await
    .map_err(|err| stage.fail(err))?;

    println!("{}", response.status);
    if let Some(body) = response.body.as_deref() {
        println!("{}", body);
    }
    if !response.status.is_success() {
        tracing::warn!("Meshery server answered the test submission with {}", response.status);
    }
    stage.advance(RunStage::Submitted);

    match refresh_token(&client, &endpoints.refresh, &token_path).await {
        Ok(()) => stage.advance(RunStage::TokenRefreshed),
        Err(err) => tracing::warn!("Error updating token: {}", err),
    }

    stage.advance(RunStage::Done);
    println!("Test Completed Successfully!");
    Ok(())
}

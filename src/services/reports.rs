//! Reports API: Merchant Center Query Language search.

use crate::client::{MerchantClient, names};
use crate::error::Result;
use crate::models::report::{ReportRow, SearchRequest, SearchResponse};

const API: &str = "/reports/v1";

/// Run one page of a query.
pub async fn search(
    client: &MerchantClient,
    account_id: &str,
    request: &SearchRequest,
) -> Result<SearchResponse> {
    client
        .post(
            &format!("{}/{}/reports:search", API, names::account(account_id)),
            &[],
            request,
        )
        .await
}

/// Run a query and collect the rows of every page.
///
/// # Process
///
/// 1. POST the query with `page_size`
/// 2. Append the page's results
/// 3. Repeat with the returned `nextPageToken` in the body until it is empty
pub async fn search_all(
    client: &MerchantClient,
    account_id: &str,
    query: &str,
    page_size: u32,
) -> Result<Vec<ReportRow>> {
    let mut rows = Vec::new();
    let mut request = SearchRequest {
        query: query.to_string(),
        page_size: Some(page_size),
        page_token: None,
    };

    loop {
        let page = search(client, account_id, &request).await?;
        rows.extend(page.results);
        match page.next_page_token {
            Some(token) if !token.is_empty() => request.page_token = Some(token),
            _ => break,
        }
    }

    tracing::debug!("Report query returned {} row(s)", rows.len());
    Ok(rows)
}

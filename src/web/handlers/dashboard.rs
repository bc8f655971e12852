//! Dashboard home page handler.

use std::cmp::Ordering;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State, rejection::QueryRejection};
use serde::Deserialize;
use url::form_urlencoded;

use super::view::LinkView;
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Column the link table is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Code,
    TargetUrl,
    Clicks,
    LastClicked,
    #[default]
    CreatedAt,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Code => "code",
            SortField::TargetUrl => "target_url",
            SortField::Clicks => "clicks",
            SortField::LastClicked => "last_clicked",
            SortField::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Query string accepted by the dashboard: `?q=...&sort=clicks&order=asc`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardQuery {
    pub q: Option<String>,
    pub sort: SortField,
    pub order: SortOrder,
}

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with a create form, a search box and
/// the link table.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub base_url: String,
    pub links: Vec<LinkView>,
    pub total_links: usize,
    pub total_clicks: i64,
    pub query: String,
    pub sort: SortField,
    pub order: SortOrder,
}

impl DashboardTemplate {
    /// Link for a column header. Clicking the active column flips the
    /// order; any other column starts descending.
    pub fn sort_href(&self, field: &str) -> String {
        let order = if field == self.sort.as_str() {
            self.order.toggled()
        } else {
            SortOrder::Desc
        };

        let mut params = form_urlencoded::Serializer::new(String::new());
        if !self.query.is_empty() {
            params.append_pair("q", &self.query);
        }
        params.append_pair("sort", field);
        params.append_pair("order", order.as_str());

        format!("/?{}", params.finish())
    }

    pub fn sort_indicator(&self, field: &str) -> &'static str {
        match (field == self.sort.as_str(), self.order) {
            (false, _) => "",
            (true, SortOrder::Asc) => "\u{2191}",
            (true, SortOrder::Desc) => "\u{2193}",
        }
    }
}

/// Renders the dashboard.
///
/// # Endpoint
///
/// `GET /?q=<text>&sort=<field>&order=<asc|desc>`
///
/// `q` keeps links whose code or target contains it, ignoring case. `sort`
/// is one of `code`, `target_url`, `clicks`, `last_clicked`, `created_at`.
/// Without parameters every link is shown newest first. Unrecognized
/// parameters fall back to that default.
pub async fn dashboard_handler(
    query: Result<Query<DashboardQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<DashboardTemplate, AppError> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let search = query.q.as_deref().map(str::trim).unwrap_or_default();

    let links = state.link_service.list_links().await?;
    let total_links = links.len();
    let total_clicks = links.iter().map(|l| i64::from(l.clicks)).sum();

    let mut shown = filter_links(links, search);
    sort_links(&mut shown, query.sort, query.order);

    Ok(DashboardTemplate {
        base_url: state.public_base_url.clone(),
        links: shown
            .into_iter()
            .map(|link| LinkView::new(&state, link))
            .collect(),
        total_links,
        total_clicks,
        query: search.to_string(),
        sort: query.sort,
        order: query.order,
    })
}

fn filter_links(links: Vec<Link>, search: &str) -> Vec<Link> {
    if search.is_empty() {
        return links;
    }

    let needle = search.to_lowercase();
    links
        .into_iter()
        .filter(|link| {
            link.code.to_lowercase().contains(&needle)
                || link.target_url.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Stable sort; links never clicked go last in either direction.
fn sort_links(links: &mut [Link], field: SortField, order: SortOrder) {
    let directed = |ord: Ordering| match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    };

    links.sort_by(|a, b| match field {
        SortField::Code => directed(a.code.cmp(&b.code)),
        SortField::TargetUrl => directed(a.target_url.cmp(&b.target_url)),
        SortField::Clicks => directed(a.clicks.cmp(&b.clicks)),
        SortField::CreatedAt => directed(a.created_at.cmp(&b.created_at)),
        SortField::LastClicked => match (a.last_clicked, b.last_clicked) {
            (Some(x), Some(y)) => directed(x.cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    });
}

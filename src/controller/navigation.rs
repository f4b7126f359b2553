//! Query state operations and the fetch effect

use tokio::task::JoinHandle;

use crate::model::{IssuedRequest, QueryState};
use super::AppController;

impl AppController {
    /// Fetch whatever the current state maps to. Called once at startup.
    pub async fn load_initial(&self) -> Option<JoinHandle<()>> {
        self.transition(|query| query.clone(), false).await
    }

    pub async fn set_search_text(&self, value: impl Into<String>) -> Option<JoinHandle<()>> {
        let value = value.into();
        self.transition(move |query| query.with_search_text(value), false).await
    }

    pub async fn append_to_search(&self, c: char) -> Option<JoinHandle<()>> {
        let mut text = self.model.lock().await.query().search_text().to_string();
        text.push(c);
        self.set_search_text(text).await
    }

    pub async fn backspace_search(&self) -> Option<JoinHandle<()>> {
        let mut text = self.model.lock().await.query().search_text().to_string();
        if text.pop().is_none() {
            return None;
        }
        self.set_search_text(text).await
    }

    pub async fn advance_page(&self) -> Option<JoinHandle<()>> {
        self.transition(QueryState::advanced, false).await
    }

    pub async fn retreat_page(&self) -> Option<JoinHandle<()>> {
        self.transition(QueryState::retreated, false).await
    }

    /// Back to page 1 of the popular catalog, always refetching
    pub async fn reset_home(&self) -> Option<JoinHandle<()>> {
        self.transition(|_| QueryState::home(), true).await
    }

    /// Produce the next query state and run the fetch effect if it asks for one
    async fn transition<F>(&self, next: F, force: bool) -> Option<JoinHandle<()>>
    where
        F: FnOnce(&QueryState) -> QueryState,
    {
        let issued = {
            let mut model = self.model.lock().await;
            let next = next(model.query());
            tracing::debug!(
                search_text = next.search_text(),
                discover_page = next.discover_page(),
                search_page = next.search_page(),
                "Query state changed"
            );
            model.apply_query(next, force)
        };
        issued.map(|issued| self.spawn_fetch(issued))
    }

    fn spawn_fetch(&self, issued: IssuedRequest) -> JoinHandle<()> {
        tracing::debug!(
            generation = issued.generation,
            page = issued.request.page(),
            request = ?issued.request,
            "Issuing catalog request"
        );

        let source = self.source.clone();
        let model = self.model.clone();
        tokio::spawn(async move {
            let result = source.fetch(issued.request).await;
            model.lock().await.accept_response(issued.generation, result);
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::Mutex;

    use super::*;
    use crate::controller::testing::{page_titled, ScriptedSource};
    use crate::model::{AppModel, CatalogRequest, TmdbError};

    fn controller(source: ScriptedSource) -> (AppController, Arc<ScriptedSource>) {
        let source = Arc::new(source);
        let model = Arc::new(Mutex::new(AppModel::new()));
        (AppController::new(model, source.clone()), source)
    }

    async fn settle(handle: Option<JoinHandle<()>>) {
        if let Some(handle) = handle {
            handle.await.unwrap();
        }
    }

    async fn displayed_title(controller: &AppController) -> Option<String> {
        let model = controller.model.lock().await;
        model
            .result_page()
            .and_then(|page| page.results.first())
            .map(|movie| movie.title.clone())
    }

    #[tokio::test]
    async fn startup_fetches_discover_page_one() {
        let (controller, source) = controller(ScriptedSource::immediate());
        settle(controller.load_initial().await).await;

        assert_eq!(source.requests(), vec![CatalogRequest::Discover { page: 1 }]);
        assert_eq!(displayed_title(&controller).await.as_deref(), Some("discover-1"));
    }

    #[tokio::test]
    async fn search_text_drives_search_requests_only() {
        let (controller, source) = controller(ScriptedSource::immediate());
        settle(controller.set_search_text("dune").await).await;
        settle(controller.advance_page().await).await;
        settle(controller.set_search_text("dune 2").await).await;

        assert!(source
            .requests()
            .iter()
            .all(|r| matches!(r, CatalogRequest::Search { .. })));
        assert_eq!(
            source.requests().last(),
            Some(&CatalogRequest::Search { query: "dune 2".into(), page: 2 })
        );
    }

    #[tokio::test]
    async fn empty_text_drives_discover_requests_only() {
        let (controller, source) = controller(ScriptedSource::immediate());
        settle(controller.load_initial().await).await;
        settle(controller.advance_page().await).await;
        settle(controller.advance_page().await).await;
        settle(controller.retreat_page().await).await;

        assert_eq!(
            source.requests(),
            vec![
                CatalogRequest::Discover { page: 1 },
                CatalogRequest::Discover { page: 2 },
                CatalogRequest::Discover { page: 3 },
                CatalogRequest::Discover { page: 2 },
            ]
        );
    }

    #[tokio::test]
    async fn advance_leaves_inactive_counter_alone() {
        let (controller, _source) = controller(ScriptedSource::immediate());
        settle(controller.advance_page().await).await;
        settle(controller.set_search_text("heat").await).await;
        settle(controller.advance_page().await).await;
        settle(controller.advance_page().await).await;

        let model = controller.model.lock().await;
        assert_eq!(model.query().discover_page(), 2);
        assert_eq!(model.query().search_page(), 3);
    }

    #[tokio::test]
    async fn retreat_at_page_one_issues_nothing() {
        let (controller, source) = controller(ScriptedSource::immediate());
        settle(controller.load_initial().await).await;

        for _ in 0..3 {
            assert!(controller.retreat_page().await.is_none());
        }
        assert_eq!(controller.model.lock().await.query().active_page(), 1);
        assert_eq!(source.requests().len(), 1);
    }

    #[tokio::test]
    async fn clearing_search_resets_counters_and_goes_back_to_discover() {
        let (controller, source) = controller(ScriptedSource::immediate());
        settle(controller.advance_page().await).await;
        settle(controller.set_search_text("alien").await).await;
        settle(controller.advance_page().await).await;
        settle(controller.set_search_text("").await).await;

        let model = controller.model.lock().await;
        assert_eq!(model.query().discover_page(), 1);
        assert_eq!(model.query().search_page(), 1);
        assert_eq!(source.requests().last(), Some(&CatalogRequest::Discover { page: 1 }));
    }

    #[tokio::test]
    async fn reset_home_always_fetches_discover_page_one() {
        let (controller, source) = controller(ScriptedSource::immediate());
        settle(controller.load_initial().await).await;

        // Already home: still refetches
        settle(controller.reset_home().await).await;
        assert_eq!(source.requests().len(), 2);

        settle(controller.advance_page().await).await;
        settle(controller.set_search_text("up").await).await;
        settle(controller.advance_page().await).await;
        settle(controller.reset_home().await).await;

        let model = controller.model.lock().await;
        assert_eq!(model.query(), &QueryState::home());
        assert_eq!(source.requests().last(), Some(&CatalogRequest::Discover { page: 1 }));
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_page() {
        let (controller, source) = controller(ScriptedSource::gated());
        let first = controller.load_initial().await;
        source.wait_for_pending(1).await;
        source.respond(0, Ok(page_titled(1, "Alpha")));
        settle(first).await;

        let second = controller.advance_page().await;
        source.wait_for_pending(2).await;
        source.respond(1, Err(TmdbError::Api { status_code: 500, message: "boom".into() }));
        settle(second).await;

        assert_eq!(displayed_title(&controller).await.as_deref(), Some("Alpha"));
        assert_eq!(controller.model.lock().await.query().discover_page(), 2);
    }

    #[tokio::test]
    async fn late_response_for_superseded_page_is_ignored() {
        let (controller, source) = controller(ScriptedSource::gated());

        let page_one = controller.set_search_text("dune").await;
        let page_two = controller.advance_page().await;
        source.wait_for_pending(2).await;

        source.respond(1, Ok(page_titled(2, "Dune page 2")));
        settle(page_two).await;
        source.respond(0, Ok(page_titled(1, "Dune page 1")));
        settle(page_one).await;

        assert_eq!(displayed_title(&controller).await.as_deref(), Some("Dune page 2"));
        assert_eq!(controller.model.lock().await.result_page().unwrap().page, 2);
    }

    #[tokio::test]
    async fn previous_page_stays_while_request_is_in_flight() {
        let (controller, source) = controller(ScriptedSource::gated());
        let first = controller.load_initial().await;
        source.wait_for_pending(1).await;
        source.respond(0, Ok(page_titled(1, "Alpha")));
        settle(first).await;

        let _in_flight = controller.advance_page().await;
        source.wait_for_pending(2).await;

        assert_eq!(displayed_title(&controller).await.as_deref(), Some("Alpha"));
    }
}

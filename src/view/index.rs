use maud::{Markup, PreEscaped, html};

use crate::HTMX_PATH;
use crate::controller::card::CardId;
use crate::mvu::scorecard::ScorecardModel;
use crate::view::card::render_card;

const REGISTER_SERVICE_WORKER: &str = r"
if ('serviceWorker' in navigator) {
  window.addEventListener('load', () => {
    navigator.serviceWorker.register('/service-worker.js')
      .catch(err => console.error('service worker registration failed', err));
  });
}";

#[must_use]
pub fn render_index_page(title: &str, model: &ScorecardModel, id: CardId) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="/static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
            script { (PreEscaped(REGISTER_SERVICE_WORKER)) }
        }
        body hx-indicator="#loadingOverlay" {
            h1 { (title) }
            div id="loadingOverlay" class="htmx-indicator" {
                img alt="Saving..." width="150" src="https://htmx.org//img/bars.svg";
            }
            (render_card(model, id))
        }
    }
}

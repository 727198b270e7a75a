//! Page and terminal rendering of a [`ViewController`] snapshot.
//!
//! The HTML page is rendered with Handlebars, which escapes every `{{value}}`
//! so user input can't break out of attributes or text nodes.

use handlebars::Handlebars;
use serde::Serialize;

use crate::{errors::RenderError, share::SEED_PARAM, view::ViewController};

pub const HEADING: &str = "YouTube Shorts Viewer";
pub const HINT: &str = "Paste any YouTube link (shorts, watch, youtu.be) to embed it.";
pub const GUIDANCE: &str = "Enter a valid YouTube link or 11-character video ID.";
pub const FOOTER: &str = "Not affiliated with YouTube. All content belongs to its respective owners.";

const PAGE_TEMPLATE_NAME: &str = "page";

/// Document metadata for the `<head>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub site_name: String,
    pub description: String,
    pub site_url: String,
}

#[derive(Serialize)]
struct HiddenField {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct PageContext<'a> {
    meta: &'a PageMeta,
    heading: &'static str,
    hint: &'static str,
    guidance: &'static str,
    footer: &'static str,
    form_action: String,
    hidden_fields: Vec<HiddenField>,
    raw_input: &'a str,
    video_id: Option<&'a str>,
    embed_url: Option<&'a str>,
    share_url: &'a str,
}

pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();

        handlebars
            .register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(|source| RenderError::Template {
                name: PAGE_TEMPLATE_NAME,
                source: Box::new(source),
            })?;

        Ok(Self { handlebars })
    }

    /// Full HTML document: the form, then either the guidance message or the
    /// player with its share panel.
    pub fn render_page(&self, view: &ViewController, meta: &PageMeta) -> Result<String, RenderError> {
        // the form submits back to the page location; a GET form replaces the
        // action's query, so every other param rides along as a hidden field
        let mut form_action = view.location().clone();
        form_action.set_query(None);
        form_action.set_fragment(None);

        let hidden_fields = view
            .location()
            .query_pairs()
            .filter(|(key, _)| key != SEED_PARAM)
            .map(|(name, value)| HiddenField {
                name: name.into_owned(),
                value: value.into_owned(),
            })
            .collect();

        let derived = view.derived();
        let context = PageContext {
            meta,
            heading: HEADING,
            hint: HINT,
            guidance: GUIDANCE,
            footer: FOOTER,
            form_action: form_action.to_string(),
            hidden_fields,
            raw_input: view.raw_input(),
            video_id: derived.video_id.as_ref().map(|id| id.as_str()),
            embed_url: derived.embed_url.as_deref(),
            share_url: &derived.share_url,
        };

        Ok(self.handlebars.render(PAGE_TEMPLATE_NAME, &context)?)
    }
}

/// Plain-text version of the page for the interactive session.
pub fn render_terminal(view: &ViewController) -> String {
    let mut out = format!("{HEADING}\n{HINT}\n\n");

    out.push_str(&format!("input: {}\n", view.raw_input()));
    if view.raw_input() != view.committed_input() {
        out.push_str(&format!("  (showing: {})\n", view.committed_input()));
    }
    out.push('\n');

    match (view.video_id(), view.embed_url()) {
        (Some(video_id), Some(embed_url)) => {
            out.push_str(&format!("video: {video_id}\n"));
            out.push_str(&format!("embed: {embed_url}\n"));
            out.push_str(&format!("share: {}\n", view.share_url()));
        }
        _ => {
            out.push_str(GUIDANCE);
            out.push('\n');
        }
    }

    out
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{meta.title}}</title>
    <meta name="description" content="{{meta.description}}">
    <link rel="canonical" href="{{meta.site_url}}">
    <meta property="og:title" content="{{meta.title}}">
    <meta property="og:description" content="{{meta.description}}">
    <meta property="og:url" content="{{meta.site_url}}">
    <meta property="og:site_name" content="{{meta.site_name}}">
    <meta property="og:type" content="website">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:title" content="{{meta.title}}">
    <meta name="twitter:description" content="{{meta.description}}">
    <link rel="icon" href="/favicon.ico" sizes="any">
    <style>
        body { margin: 0; min-height: 100vh; background: #030712; color: #f3f4f6; font-family: system-ui, sans-serif; }
        main { max-width: 64rem; margin: 0 auto; padding: 2.5rem 1.5rem; }
        h1 { font-size: 1.875rem; font-weight: 600; margin: 0; }
        .hint { font-size: .875rem; color: #9ca3af; margin-top: .5rem; }
        form { display: flex; gap: .75rem; margin: 2rem 0 1.5rem; }
        input { flex: 1; border-radius: .375rem; border: 1px solid #1f2937; background: #111827; color: inherit; padding: .75rem 1rem; }
        button { border-radius: .375rem; border: 1px solid #374151; background: transparent; color: inherit; padding: .5rem .75rem; cursor: pointer; }
        button[type=submit] { background: #ef4444; border: 0; padding: .75rem 1.25rem; }
        .panel { border-radius: .5rem; border: 1px solid #1f2937; background: #111827; padding: 1.5rem; font-size: .875rem; color: #d1d5db; }
        .player { aspect-ratio: 16 / 9; width: 100%; overflow: hidden; border-radius: .5rem; border: 1px solid #1f2937; background: #000; margin-bottom: 1rem; }
        .player iframe { width: 100%; height: 100%; border: 0; }
        .share { display: flex; justify-content: space-between; align-items: center; gap: .5rem; }
        .share-url { color: #f3f4f6; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
        footer { margin-top: 2.5rem; font-size: .75rem; color: #6b7280; }
    </style>
</head>
<body>
<main>
    <header>
        <h1>{{heading}}</h1>
        <p class="hint">{{hint}}</p>
    </header>

    <form method="get" action="{{form_action}}">
        <input aria-label="YouTube URL" name="url" value="{{raw_input}}"
               placeholder="https://youtube.com/shorts/... or https://youtube.com/watch?v=...">
        <button type="submit">Embed</button>
{{#each hidden_fields}}
        <input type="hidden" name="{{name}}" value="{{value}}">
{{/each}}
    </form>

{{#if embed_url}}
    <section id="player" data-video-id="{{video_id}}">
        <div class="player">
            <iframe src="{{embed_url}}"
                    title="YouTube video player"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                    allowfullscreen
                    referrerpolicy="strict-origin-when-cross-origin"></iframe>
        </div>
        <div class="panel share">
            <div>
                Share this page with your link embedded:
                <div class="share-url">{{share_url}}</div>
            </div>
            <div>
                <button type="button" id="copy-share" data-copy="{{share_url}}">Copy Page URL</button>
                <button type="button" id="copy-embed" data-copy="{{embed_url}}">Copy Embed URL</button>
            </div>
        </div>
    </section>
    <script>
        document.querySelectorAll("[data-copy]").forEach(function (button) {
            button.addEventListener("click", function () {
                if (navigator.clipboard) {
                    navigator.clipboard.writeText(button.dataset.copy).catch(function () {});
                }
            });
        });
    </script>
{{else}}
    <div class="panel" id="guidance">{{guidance}}</div>
{{/if}}

    <footer>{{footer}}</footer>
</main>
</body>
</html>
"##;

use crate::models::{BoardResponse, Task};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::time::Duration;

// Display cap only; the stored count is never clamped.
pub const MAX_TICK_SEGMENTS: u64 = 200;

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    AddTask,
    ConfirmClear,
}

impl Overlay {
    pub fn from_query(value: Option<&str>, board_is_empty: bool) -> Self {
        match value {
            Some("add") => Self::AddTask,
            Some("clear") if !board_is_empty => Self::ConfirmClear,
            _ => Self::None,
        }
    }
}

pub struct ConfirmDialog<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub confirm_label: &'a str,
    pub action: &'a str,
}

const CLEAR_ALL_DIALOG: ConfirmDialog<'static> = ConfirmDialog {
    title: "Clear all tasks?",
    message: "This will remove all tasks for today. Continue?",
    confirm_label: "Clear All",
    action: "/tasks/clear",
};

pub fn render_index(board: &BoardResponse, overlay: Overlay, reload_in: Duration) -> String {
    let overlay_html = match overlay {
        Overlay::None => String::new(),
        Overlay::AddTask => render_add_overlay(),
        Overlay::ConfirmClear => render_confirm_overlay(&CLEAR_ALL_DIALOG),
    };

    INDEX_HTML
        .replace("{{DATE}}", &escape_html(&board.date))
        .replace("{{TOTAL}}", &board.total_ticks.to_string())
        .replace("{{CLEAR_BUTTON}}", &render_clear_button(board.tasks.is_empty()))
        .replace("{{OVERLAY}}", &overlay_html)
        .replace("{{RELOAD_MS}}", &reload_in.as_millis().to_string())
        // user text goes in last so its braces are never read as placeholders
        .replace("{{TASKS}}", &render_task_list(&board.tasks))
}

fn render_clear_button(disabled: bool) -> String {
    if disabled {
        r#"<button type="button" class="toolbar-button" disabled>Clear all</button>"#.to_string()
    } else {
        r#"<a class="toolbar-button" href="/?overlay=clear">Clear all</a>"#.to_string()
    }
}

pub fn render_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return r#"<div class="empty-state">
        <p class="empty-state__title">No micro-grinds yet.</p>
        <p class="empty-state__hint">Tap the <span class="empty-state__plus">+</span> to add your first task.</p>
      </div>"#
            .to_string();
    }

    let cards: String = tasks.iter().map(render_task_card).collect();
    format!(r#"<div class="task-list">{cards}</div>"#)
}

pub fn render_task_card(task: &Task) -> String {
    let id = escape_html(&task.id);
    let path_id = utf8_percent_encode(&task.id, PATH_SEGMENT).to_string();
    let description = match task.description.as_deref().filter(|text| !text.is_empty()) {
        Some(text) => format!(r#"<p class="task-card__description">{}</p>"#, escape_html(text)),
        None => r#"<p class="task-card__description task-card__description--muted">No description</p>"#
            .to_string(),
    };

    format!(
        r#"
        <article class="task-card" data-task-id="{id}">
          <header class="task-card__header">
            <div class="task-card__title-row">
              <h3 class="task-card__title">{name}</h3>
              <span class="task-card__count">{count}</span>
            </div>
            <div class="task-card__divider"></div>
            {description}
          </header>
          <div class="task-card__body">
            <form method="post" action="/tasks/{path_id}/count">
              <input type="hidden" name="delta" value="-1" />
              <button type="submit" class="task-card__btn task-card__btn--minus">-1</button>
            </form>
            <div class="task-card__ticks-wrapper">{ticks}</div>
            <form method="post" action="/tasks/{path_id}/count">
              <input type="hidden" name="delta" value="1" />
              <button type="submit" class="task-card__btn task-card__btn--plus">+1</button>
            </form>
          </div>
        </article>"#,
        name = escape_html(&task.name),
        count = task.count,
        ticks = render_tick_bar(task.count),
    )
}

pub fn tick_segments(count: u64) -> usize {
    if count == 0 {
        return 0;
    }
    count.clamp(1, MAX_TICK_SEGMENTS) as usize
}

pub fn render_tick_bar(count: u64) -> String {
    let segments = tick_segments(count);
    if segments == 0 {
        return r#"<div class="tick-bar tick-bar--empty"></div>"#.to_string();
    }

    let ticks = r#"<div class="tick-bar__tick"></div>"#.repeat(segments);
    format!(r#"<div class="tick-bar" style="--tick-count: {segments}">{ticks}</div>"#)
}

pub fn render_add_overlay() -> String {
    r#"
    <div class="modal-backdrop">
      <a class="modal-backdrop__dismiss" href="/" aria-label="Dismiss"></a>
      <form class="modal" method="post" action="/tasks">
        <h2 class="modal__title">New Micro-Grind</h2>
        <label class="modal__label">
          <span>Name *</span>
          <input class="modal__input" name="name" required autofocus placeholder="e.g. Stretch, Dish Run, Study Burst" />
        </label>
        <label class="modal__label">
          <span>Description</span>
          <textarea class="modal__textarea" name="description" rows="3" placeholder="Optional flavor text or specifics"></textarea>
        </label>
        <div class="modal__actions">
          <a class="btn btn--ghost" href="/">Cancel</a>
          <button type="submit" class="btn btn--primary">Save</button>
        </div>
      </form>
    </div>"#
        .to_string()
}

pub fn render_confirm_overlay(dialog: &ConfirmDialog<'_>) -> String {
    format!(
        r#"
    <div class="modal-backdrop">
      <a class="modal-backdrop__dismiss" href="/" aria-label="Cancel"></a>
      <form class="modal" method="post" action="{action}">
        <h2 class="modal__title">{title}</h2>
        <p class="modal__message">{message}</p>
        <input type="hidden" name="confirmed" value="true" />
        <div class="modal__actions">
          <a class="btn btn--ghost" href="/">Cancel</a>
          <button type="submit" class="btn btn--danger">{label}</button>
        </div>
      </form>
    </div>"#,
        action = escape_html(dialog.action),
        title = escape_html(dialog.title),
        message = escape_html(dialog.message),
        label = escape_html(dialog.confirm_label),
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Tick</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #8b857d;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --danger: #ff3b30;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    .app__header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .app__title {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .app__subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .app__toolbar {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .app__summary {
      display: grid;
      text-align: right;
    }

    .app__summary-label {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .app__summary-value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    a.toolbar-button,
    a.icon-button,
    a.btn {
      text-decoration: none;
    }

    .toolbar-button,
    .btn,
    .task-card__btn {
      appearance: none;
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 999px;
      padding: 10px 16px;
      font: inherit;
      font-weight: 600;
      background: white;
      color: var(--accent-2);
      cursor: pointer;
    }

    .toolbar-button[disabled] {
      opacity: 0.4;
      cursor: not-allowed;
    }

    .icon-button {
      width: 44px;
      height: 44px;
      border-radius: 50%;
      display: inline-grid;
      place-items: center;
      background: var(--accent);
      color: white;
      font-size: 1.6rem;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .empty-state {
      text-align: center;
      padding: 48px 0;
      color: #6f6a65;
    }

    .empty-state__title {
      font-size: 1.2rem;
      font-weight: 600;
    }

    .empty-state__plus {
      color: var(--accent);
      font-weight: 600;
    }

    .task-list {
      display: grid;
      gap: 16px;
    }

    .task-card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
    }

    .task-card__title-row {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
    }

    .task-card__title {
      margin: 0;
      font-size: 1.15rem;
    }

    .task-card__count {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent);
    }

    .task-card__divider {
      height: 1px;
      background: rgba(47, 72, 88, 0.1);
      margin: 8px 0;
    }

    .task-card__description {
      margin: 0;
      font-size: 0.9rem;
    }

    .task-card__description--muted {
      color: var(--muted);
      font-style: italic;
    }

    .task-card__body {
      display: grid;
      grid-template-columns: auto 1fr auto;
      align-items: center;
      gap: 12px;
    }

    .task-card__body form {
      margin: 0;
    }

    .task-card__btn--plus {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    .tick-bar {
      display: flex;
      gap: 2px;
      height: 18px;
    }

    .tick-bar__tick {
      flex: 1 1 calc(100% / var(--tick-count));
      background: var(--accent-2);
      border-radius: 3px;
    }

    .tick-bar--empty {
      background: rgba(47, 72, 88, 0.08);
      border-radius: 3px;
    }

    .modal-backdrop {
      position: fixed;
      inset: 0;
      display: grid;
      place-items: center;
      background: rgba(43, 42, 40, 0.45);
    }

    .modal-backdrop__dismiss {
      position: absolute;
      inset: 0;
    }

    .modal {
      position: relative;
      width: min(420px, calc(100% - 36px));
      background: white;
      border-radius: 22px;
      padding: 24px;
      display: grid;
      gap: 14px;
      box-shadow: var(--shadow);
    }

    .modal__title {
      margin: 0;
    }

    .modal__message {
      font-size: 14px;
      color: #666;
      margin: 0;
    }

    .modal__label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
    }

    .modal__input,
    .modal__textarea {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    .modal__actions {
      display: flex;
      justify-content: flex-end;
      gap: 10px;
    }

    .btn--ghost {
      background: transparent;
    }

    .btn--primary {
      background: var(--accent-2);
      border-color: var(--accent-2);
      color: white;
    }

    .btn--danger {
      background: var(--danger);
      border-color: var(--danger);
      color: white;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <div class="app" data-date="{{DATE}}">
    <header class="app__header">
      <div class="app__title-block">
        <h1 class="app__title">Tick</h1>
        <p class="app__subtitle">Daily micro-grind tracker</p>
      </div>
      <div class="app__toolbar">
        <div class="app__summary">
          <span class="app__summary-label">Total ticks</span>
          <span class="app__summary-value" id="total-ticks">{{TOTAL}}</span>
        </div>
        {{CLEAR_BUTTON}}
        <a class="icon-button" href="/?overlay=add" aria-label="Add task">+</a>
      </div>
    </header>

    <main class="app__main">
      {{TASKS}}
    </main>
  </div>
  {{OVERLAY}}

  <script>
    setTimeout(() => window.location.assign('/'), {{RELOAD_MS}});
  </script>
</body>
</html>
"#;

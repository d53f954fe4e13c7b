//! Expressions evaluated inside the page.
//!
//! Every value spliced into a template is encoded as a JSON literal, so ids
//! and selectors can never break out of their string.

use serde_json::Value;

use super::PageSelectors;

const SCAN: &str = r#"(() => {
  const attr = __ATTR__;
  const buttons = Array.from(document.querySelectorAll('div[' + attr + '] ' + __FOCUS__));
  return buttons.map((button, index) => {
    const tile = button.closest('[' + attr + ']');
    if (!tile) {
      return { index, id: null, mediaCount: 0, gridLike: false, rect: null };
    }
    let rect = null;
    try {
      const r = tile.getBoundingClientRect();
      rect = { x: r.x, y: r.y, width: r.width, height: r.height };
    } catch (_) {}
    return {
      index,
      id: tile.getAttribute(attr),
      mediaCount: tile.querySelectorAll('video, canvas').length,
      gridLike: tile.querySelector('[class*="grid" i],[class*="gallery" i]') !== null,
      rect,
    };
  });
})()"#;

const ACTIVATE: &str = r#"(() => {
  const selector = 'div[' + __ATTR__ + '="' + CSS.escape(__ID__) + '"] ' + __FOCUS__;
  const target = document.querySelector(selector);
  if (!target) {
    return false;
  }
  target.click();
  return true;
})()"#;

const INSTALL_HOOK: &str = r#"(() => {
  const url = __URL__;
  if (window.__tileswitchShortcuts === url) {
    return false;
  }
  if (window.__tileswitchShortcutListener) {
    window.removeEventListener('keydown', window.__tileswitchShortcutListener, true);
  }
  const listener = (e) => {
    if (!(__CONDITION__)) {
      return;
    }
    const key = e.key;
    if (!/^F([1-9]|1[0-2])$/.test(key) && key !== 'ArrowRight' && key !== 'ArrowLeft' && key.toLowerCase() !== 's') {
      return;
    }
    e.preventDefault();
    e.stopPropagation();
    fetch(url, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ key, altKey: e.altKey, ctrlKey: e.ctrlKey, shiftKey: e.shiftKey, metaKey: e.metaKey }),
    }).catch((err) => {
      console.warn('[tileswitch] shortcut not forwarded to ' + url + ':', err);
    });
  };
  window.addEventListener('keydown', listener, true);
  window.__tileswitchShortcutListener = listener;
  window.__tileswitchShortcuts = url;
  return true;
})()"#;

pub(crate) const PING: &str = "document.readyState";

fn literal(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

fn with_selectors(template: &str, selectors: &PageSelectors) -> String {
    template
        .replace("__ATTR__", &literal(&selectors.tile_attribute))
        .replace("__FOCUS__", &literal(&selectors.focus_selector))
}

/// Expression returning one raw probe per focus-target control.
pub(crate) fn scan(selectors: &PageSelectors) -> String {
    with_selectors(SCAN, selectors)
}

/// Expression clicking the focus control of `id`, returning whether it existed.
pub(crate) fn activate(selectors: &PageSelectors, id: &str) -> String {
    // The id goes in last so its text is never scanned for placeholders.
    with_selectors(ACTIVATE, selectors).replace("__ID__", &literal(id))
}

/// Expression installing the `keydown` forwarder. `condition` is a JS boolean
/// expression over the event `e`.
pub(crate) fn install_hook(bridge_url: &str, condition: &str) -> String {
    INSTALL_HOOK
        .replace("__CONDITION__", condition)
        .replace("__URL__", &literal(bridge_url))
}

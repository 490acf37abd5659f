//! CSS and inline script for the landing page.
//!
//! The stylesheet defines the styling hooks the section markup uses
//! (`logo`, `large-text`, `purple-text`, `subtitle`, `image-450`) plus a
//! minimal two-column grid. The grid is a fallback only: on the docs site the
//! `container`/`row`/`col` classes come from the site theme.
//!
//! # Customization
//!
//! ```rust
//! use landing_section::styles::SECTION_CSS;
//!
//! let my_css = ".large-text { font-size: 3rem; }";
//! let combined = format!("{}\n{}", SECTION_CSS, my_css);
//! assert!(combined.contains(".purple-text"));
//! ```

/// Stylesheet for the landing section.
pub const SECTION_CSS: &str = r#"
:root {
    --labs-purple: #8661c5;
    --labs-text: #1b1b1f;
    --labs-muted: #5c5c66;
    --labs-primary: #0078d4;
    --font-sans: 'Segoe UI', system-ui, -apple-system, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    color: var(--labs-text);
    margin: 0;
    padding: 48px 0;
}

/* Grid fallback */
.container {
    max-width: 1140px;
    margin: 0 auto;
    padding: 0 16px;
}

.row {
    display: flex;
    flex-wrap: wrap;
    margin: 0 -8px;
}

.col {
    padding: 0 8px;
    flex: 1 0 0;
}

.col--6 {
    flex: 0 0 50%;
    max-width: 50%;
}

@media (max-width: 996px) {
    .col--6 {
        flex: 0 0 100%;
        max-width: 100%;
    }
}

/* Section hooks */
.logo {
    height: 64px;
    margin: 0 8px 32px;
}

.large-text {
    font-size: 3rem;
    font-weight: 700;
    line-height: 1.2;
    padding: 0 8px;
}

.purple-text {
    color: var(--labs-purple);
}

.subtitle {
    font-size: 1.25rem;
    color: var(--labs-muted);
    margin: 24px 0;
    padding: 0 8px;
}

.buttons {
    padding: 0 8px;
}

.image-450 {
    width: 450px;
    height: 450px;
    max-width: 100%;
    object-fit: contain;
}

/* Buttons */
.button {
    display: inline-block;
    border-radius: 6px;
    font-weight: 700;
    text-decoration: none;
}

.button--lg {
    font-size: 1.2rem;
    padding: 12px 32px;
}

.button--primary {
    background: var(--labs-primary);
    color: #ffffff;
}

.button--primary:hover {
    filter: brightness(1.1);
}

/* Typewriter */
.typewriter-cursor {
    display: inline-block;
    margin-left: 2px;
    color: var(--labs-purple);
    animation: typewriter-blink 1s step-end infinite;
}

@keyframes typewriter-blink {
    50% {
        opacity: 0;
    }
}
"#;

/// Browser-side driver for `.typewriter` spans.
///
/// Runs the same type/pause/delete cycle as
/// [`crate::cycler::Typewriter`], reading the words and timing from the
/// span's `data-*` attributes. Timers are cleared on `pagehide`.
///
/// Text children are HTML-escaped when rendered, so the script must not
/// contain `<`, `>` or `&`.
pub const CYCLER_SCRIPT: &str = r#"
(function () {
  var mounted = [];

  function animate(el) {
    var words;
    try {
      words = JSON.parse(el.dataset.words || '[]');
    } catch (e) {
      words = [];
    }
    var out = el.querySelector('.typewriter-text');
    if (!out || words.length === 0) {
      return;
    }
    var typing = Number(el.dataset.typingMs) || 100;
    var pause = Number(el.dataset.pauseMs) || 1500;
    var deleting = Number(el.dataset.deletingMs) || 50;
    var index = 0;
    var length = 0;
    var phase = 'typing';

    function delay() {
      if (phase === 'typing') {
        return typing;
      }
      return phase === 'pausing' ? pause : deleting;
    }

    function step() {
      var word = Array.from(words[index]);
      if (phase === 'typing') {
        length = Math.min(length + 1, word.length);
        if (length === word.length) {
          phase = 'pausing';
        }
      } else if (phase === 'pausing') {
        phase = 'deleting';
      } else {
        length = Math.max(length - 1, 0);
        if (length === 0) {
          index = (index + 1) % words.length;
          phase = 'typing';
        }
      }
      out.textContent = Array.from(words[index]).slice(0, length).join('');
      el.cyclerTimer = window.setTimeout(step, delay());
    }

    out.textContent = '';
    el.cyclerTimer = window.setTimeout(step, delay());
    mounted.push(el);
  }

  document.querySelectorAll('.typewriter[data-words]').forEach(animate);

  window.addEventListener('pagehide', function () {
    mounted.forEach(function (el) {
      window.clearTimeout(el.cyclerTimer);
    });
    mounted = [];
  });
})();
"#;

/// Content Security Policy for the standalone page (inline style and script,
/// images from the same origin only).
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'unsafe-inline'; connect-src 'none';";

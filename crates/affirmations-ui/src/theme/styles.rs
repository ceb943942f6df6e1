//! Stylesheet for the affirmation list and cards.
//!
//! Colors come from the custom properties set by [`super::Theme::style_vars`].
//! Sizes here must stay in step with `affirmations_core::CardMetrics`, which
//! estimates card heights for list virtualization.

pub const CARD_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  font-family: 'Roboto', 'Helvetica Neue', Arial, sans-serif;
}

/* === List === */
.affirmation-list {
  display: flex;
  flex-direction: column;
  height: 100vh;
  overflow-y: auto;
  padding: 0 8px;
  background: var(--color-background);
  color: var(--color-on-surface);
}

.affirmation-list__spacer {
  width: 100%;
  flex-shrink: 0;
}

/* === Card === */
.affirmation-card {
  flex-shrink: 0;
  margin: 8px 0;
  border-radius: 4px;
  overflow: hidden;
  background: var(--color-surface);
  box-shadow: 0 2px 4px var(--color-shadow), 0 4px 8px var(--color-shadow);
}

.affirmation-card__content {
  display: flex;
  flex-direction: column;
}

.affirmation-card__image {
  display: block;
  width: 100%;
  height: 194px;
  object-fit: cover;
}

.affirmation-card__text {
  padding: 16px;
  font-size: 20px;
  line-height: 28px;
  font-weight: 500;
  letter-spacing: 0.15px;
}

/* === Expand button === */
.expand-btn {
  align-self: flex-start;
  width: 48px;
  height: 48px;
  margin-left: 4px;
  border: none;
  border-radius: 50%;
  background: transparent;
  color: var(--color-secondary);
  cursor: pointer;
}

.expand-btn:hover,
.expand-btn:focus-visible {
  background: rgba(0, 0, 0, 0.08);
}

.expand-btn__icon {
  width: 24px;
  height: 24px;
  fill: currentColor;
}

/* === Description === */
.affirmation-description {
  padding: 8px 16px 16px 16px;
  overflow: hidden;
  transform-origin: top;
  animation: description-expand 400ms cubic-bezier(0.34, 1.56, 0.64, 1);
}

/* Medium-bouncy spring: overshoot then settle */
@keyframes description-expand {
  from {
    opacity: 0;
    transform: scaleY(0.6) translateY(-12px);
  }
  to {
    opacity: 1;
    transform: scaleY(1) translateY(0);
  }
}

@media (prefers-reduced-motion: reduce) {
  .affirmation-description {
    animation: none;
  }
}

.affirmation-description__heading {
  font-size: 48px;
  line-height: 58px;
  font-weight: 400;
}

.affirmation-description__body {
  font-size: 16px;
  line-height: 24px;
  color: var(--color-on-surface-muted);
}
"#;

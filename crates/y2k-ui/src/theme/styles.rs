//! Global CSS styles for the Y2K components.
//!
//! Every class emitted by the components in this crate is defined here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ELECTRIC */
  --y2k-electric-blue: #0066ff;
  --y2k-cyan: #00ccff;
  --y2k-glow: rgba(0, 204, 255, 0.3);

  /* GLASS */
  --y2k-translucent-blue: rgba(0, 102, 255, 0.15);
  --y2k-glass-blue: rgba(0, 204, 255, 0.08);

  /* CHROME */
  --y2k-chrome: #c0c8d8;
  --y2k-silver: #8892a6;
  --y2k-dark-chrome: #4a5568;

  /* Typography */
  --font-primary: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif;
  --font-display: 'Orbitron', 'Inter', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'Consolas', 'Monaco', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-primary);
  min-height: 100vh;
}

.theme-light {
  background: linear-gradient(135deg, #f8fafc 0%, #e2e8f0 100%);
  color: #1a202c;
}

.theme-dark {
  background: #0f172a;
  color: #e2e8f0;
}

/* === Effects === */
.glass-card {
  background: rgba(255, 255, 255, 0.25);
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
  border: 1px solid rgba(255, 255, 255, 0.35);
  box-shadow: 0 8px 32px rgba(0, 102, 255, 0.12);
}

.theme-dark .glass-card {
  background: rgba(15, 23, 42, 0.45);
  border-color: rgba(0, 204, 255, 0.2);
}

.chrome-surface {
  background: linear-gradient(145deg, #e6ebf3 0%, var(--y2k-chrome) 45%, var(--y2k-silver) 100%);
  border: 1px solid rgba(255, 255, 255, 0.6);
  box-shadow: inset 0 1px 0 rgba(255, 255, 255, 0.8), 0 2px 6px rgba(74, 85, 104, 0.25);
}

.glow-blue {
  box-shadow: 0 0 20px var(--y2k-glow), 0 0 40px rgba(0, 102, 255, 0.15);
}

.button-3d {
  background: linear-gradient(180deg, #f4f6fa 0%, var(--y2k-chrome) 100%);
  border: 1px solid var(--y2k-silver);
  box-shadow: 0 3px 0 var(--y2k-dark-chrome), inset 0 1px 0 rgba(255, 255, 255, 0.9);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.button-3d:active {
  transform: translateY(2px);
  box-shadow: 0 1px 0 var(--y2k-dark-chrome), inset 0 1px 0 rgba(255, 255, 255, 0.9);
}

.font-display {
  font-family: var(--font-display);
  letter-spacing: 0.05em;
}

.text-tech {
  text-transform: uppercase;
  letter-spacing: 0.15em;
}

.text-digital {
  font-family: var(--font-mono);
  text-shadow: 0 0 6px var(--y2k-glow);
}

.opacity-50 {
  opacity: 0.5;
}

@keyframes y2k-pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

.animate-pulse {
  animation: y2k-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

/* === Grid Pattern === */
.grid-pattern {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

/* === Floating Orbs === */
.orb-field {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.floating-orb {
  position: absolute;
  border-radius: 9999px;
  filter: blur(4px);
}

/* === Tech Frame === */
.tech-frame {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.tech-frame-segment {
  position: absolute;
}

.frame-line-bottom { bottom: 0; left: 0; right: 0; height: 1px; }
.frame-line-left { top: 0; bottom: 0; left: 0; width: 1px; }
.frame-line-right { top: 0; bottom: 0; right: 0; width: 1px; }

.frame-corner { width: 1rem; height: 1rem; border-color: var(--y2k-electric-blue); }
.frame-corner-tl { top: 0.5rem; left: 0.5rem; border-top: 2px solid; border-left: 2px solid; border-top-left-radius: 0.5rem; }
.frame-corner-tr { top: 0.5rem; right: 0.5rem; border-top: 2px solid; border-right: 2px solid; border-top-right-radius: 0.5rem; }
.frame-corner-bl { bottom: 0.5rem; left: 0.5rem; border-bottom: 2px solid; border-left: 2px solid; border-bottom-left-radius: 0.5rem; }
.frame-corner-br { bottom: 0.5rem; right: 0.5rem; border-bottom: 2px solid; border-right: 2px solid; border-bottom-right-radius: 0.5rem; }

.frame-line-electric {
  background: linear-gradient(to right, transparent, rgba(0, 102, 255, 0.5), transparent);
}

.frame-line-cyan {
  background: linear-gradient(to bottom, transparent, rgba(0, 204, 255, 0.5), transparent);
}

.frame-accent-electric {
  border-color: rgba(0, 102, 255, 0.3);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: 0.5rem;
  font-family: inherit;
  cursor: pointer;
  border: 1px solid transparent;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-default {
  background: var(--y2k-electric-blue);
  color: #ffffff;
}

.btn-ghost {
  background: transparent;
  color: inherit;
}

.btn-ghost:hover {
  background: var(--y2k-glass-blue);
}

.btn-size-default { height: 2.25rem; padding: 0 1rem; font-size: 0.875rem; }
.btn-size-sm { height: 2rem; padding: 0 0.75rem; font-size: 0.8125rem; }
.btn-size-lg { height: 2.5rem; padding: 0 1.5rem; font-size: 1rem; }

.icon-btn {
  width: 2rem;
  padding: 0.5rem;
}

/* === Badges === */
.badge {
  display: inline-flex;
  align-items: center;
  border-radius: 0.375rem;
  padding: 0.125rem 0.5rem;
  font-size: 0.75rem;
  font-weight: 500;
  border: 1px solid transparent;
}

.badge-default { background: var(--y2k-electric-blue); color: #ffffff; }
.badge-secondary { background: var(--y2k-chrome); color: var(--y2k-dark-chrome); }
.badge-outline { border-color: var(--y2k-silver); color: inherit; }

/* === Announcement Banner === */
.announcement-banner {
  position: relative;
  overflow: hidden;
  border-radius: 1rem;
  padding: 1.5rem;
  border-width: 1px;
  border-style: solid;
  transition: transform var(--transition-slow);
}

.announcement-banner:hover {
  transform: scale(1.02);
}

.banner-variant-default {
  background-image: linear-gradient(to right, rgba(0, 102, 255, 0.1), rgba(0, 204, 255, 0.1));
  border-color: rgba(0, 102, 255, 0.2);
}

.banner-variant-electric {
  background-image: linear-gradient(to right, rgba(0, 102, 255, 0.2), rgba(0, 204, 255, 0.2));
  border-color: rgba(0, 204, 255, 0.3);
}

.banner-variant-chrome {
  background-image: linear-gradient(to right, rgba(192, 200, 216, 0.2), rgba(136, 146, 166, 0.2));
  border-color: rgba(192, 200, 216, 0.3);
}

.banner-variant-glow {
  background-image: linear-gradient(to right, rgba(0, 102, 255, 0.15), rgba(0, 204, 255, 0.15));
  border-color: rgba(0, 204, 255, 0.4);
}

.banner-body {
  position: relative;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.banner-main {
  flex: 1;
  display: flex;
  align-items: center;
  gap: 1rem;
}

.banner-icon { flex-shrink: 0; }

.banner-icon-tile {
  border-radius: 0.75rem;
  padding: 0.75rem;
}

.banner-text {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.banner-heading {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.banner-title { font-size: 1.125rem; }

.banner-message {
  font-size: 0.875rem;
  line-height: 1.625;
}

.banner-controls {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.banner-action-label { font-size: 0.875rem; }

/* === Showcase Layout === */
.showcase {
  max-width: 56rem;
  margin: 0 auto;
  padding: 2rem 1rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.showcase-title {
  font-family: var(--font-display);
  font-size: 2rem;
  text-align: center;
  background: linear-gradient(to right, var(--y2k-electric-blue), var(--y2k-cyan));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.showcase-subtitle {
  text-align: center;
  color: var(--y2k-silver);
}
"#;

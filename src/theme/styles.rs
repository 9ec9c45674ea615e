//! Global CSS styles for Sheet Gallery.
//!
//! Layout is shared; each theme only recolors it under its root class
//! (`.theme-console`, `.theme-database`, `.theme-archive`, `.theme-grid`).

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=VT323&family=Press+Start+2P&display=swap');

/* === CSS Custom Properties === */
:root {
  --bg: #111111;
  --fg: #eeeeee;
  --muted: rgba(238, 238, 238, 0.6);
  --accent: #ffffff;
  --tile-bg: #000000;
  --tile-border: transparent;
  --bar-bg: #111111;
  --font-body: system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-label: var(--font-body);

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  background: var(--bg);
  color: var(--fg);
  font-family: var(--font-body);
  min-height: 100vh;
}

/* === Page Layout === */
.gallery-page {
  min-height: 100vh;
  background: var(--bg);
  color: var(--fg);
  font-family: var(--font-body);
  padding-bottom: 4rem;
}

.gallery-header {
  position: sticky;
  top: 0;
  z-index: 40;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem 1.5rem;
  background: var(--bar-bg);
  border-bottom: 1px solid var(--tile-border);
}

.gallery-header__title {
  font-family: var(--font-label);
  font-size: 1.75rem;
  line-height: 1;
}

.gallery-header__subtitle,
.gallery-header__count {
  font-family: var(--font-label);
  color: var(--muted);
}

.gallery-main {
  padding: 1.5rem;
}

.gallery-loading,
.gallery-empty {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 4rem 1rem;
  color: var(--muted);
  font-family: var(--font-label);
}

.loading-spinner {
  width: 24px;
  height: 24px;
  border: 2px solid var(--muted);
  border-top-color: transparent;
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.gallery-footer {
  position: fixed;
  bottom: 0;
  width: 100%;
  padding: 0.5rem;
  text-align: center;
  background: var(--bar-bg);
  color: var(--muted);
  font-family: var(--font-label);
  z-index: 30;
}

/* === Grid === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.5rem;
}

.tile {
  cursor: pointer;
  background: var(--tile-bg);
  border: 2px solid var(--tile-border);
  transition: border-color var(--transition-fast);
  animation: tile-in 400ms cubic-bezier(0.34, 1.56, 0.64, 1) both;
}

.tile:hover {
  border-color: var(--accent);
}

@keyframes tile-in {
  from { transform: scale(0); }
  to { transform: scale(1); }
}

.tile__frame {
  position: relative;
  overflow: hidden;
  aspect-ratio: 1;
}

.tile__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
  transition: transform var(--transition-normal);
}

.tile:hover .tile__img {
  transform: scale(1.1);
}

.tile__sheen {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.tile__label {
  padding: 0.5rem;
  font-family: var(--font-label);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

/* === Lightbox === */
.lightbox-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.95);
  backdrop-filter: blur(4px);
  outline: none;
  animation: fade-in var(--transition-normal);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.lightbox {
  position: relative;
  width: 95%;
  max-width: 72rem;
  max-height: 85vh;
  display: flex;
  flex-direction: column;
  background: #000;
  border: 2px solid var(--tile-border);
}

.lightbox__image {
  flex: 1;
  overflow: hidden;
}

.lightbox__image img {
  width: 100%;
  height: 100%;
  max-height: 75vh;
  object-fit: contain;
  background: #050505;
}

.lightbox__bar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.75rem 1rem;
  background: var(--bar-bg);
  font-family: var(--font-label);
  font-size: 1.25rem;
}

.lightbox__caption {
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
  margin-right: 1rem;
}

.lightbox__close {
  background: none;
  border: none;
  color: var(--fg);
  font-size: 1.5rem;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.lightbox__close:hover {
  color: #ef4444;
}

.lightbox__close--floating {
  position: absolute;
  top: -2.5rem;
  right: 0;
  display: none;
}

@media (max-width: 768px) {
  .lightbox__close--floating { display: block; }
}

/* === Theme: console === */
.theme-console {
  --bg: #0a0a0a;
  --fg: #a8a8a8;
  --muted: #9ca3af;
  --accent: #f97316;
  --tile-border: #4b5563;
  --bar-bg: #111111;
  --font-body: 'VT323', monospace;
  --font-label: 'VT323', monospace;
  cursor: crosshair;
}

.theme-console .gallery-page {
  text-shadow: 2px 0 rgba(255, 0, 0, 0.5), -2px 0 rgba(0, 255, 255, 0.5);
  animation: flicker 0.15s infinite;
}

.theme-console .gallery-header__title { color: #fff; }
.theme-console .tile { box-shadow: 5px 5px 0 rgba(0, 0, 0, 0.5); }
.theme-console .tile__label { background: #1a1a1a; color: #fff; letter-spacing: 0.1em; font-size: 1.25rem; }
.theme-console .tile__sheen { background: linear-gradient(135deg, rgba(255,255,255,0.2), transparent, rgba(0,0,0,0.4)); }

.crt-scanlines {
  position: fixed;
  inset: 0;
  z-index: 50;
  pointer-events: none;
  background:
    linear-gradient(rgba(18, 16, 16, 0) 50%, rgba(0, 0, 0, 0.25) 50%),
    linear-gradient(90deg, rgba(255, 0, 0, 0.06), rgba(0, 255, 0, 0.02), rgba(0, 0, 255, 0.06));
  background-size: 100% 3px, 3px 100%;
  opacity: 0.6;
}

.crt-vignette {
  position: fixed;
  inset: 0;
  z-index: 60;
  pointer-events: none;
  background: radial-gradient(circle, rgba(0,0,0,0) 60%, rgba(0,0,0,1) 130%);
}

@keyframes flicker {
  0% { opacity: 0.97; }
  50% { opacity: 1; }
  100% { opacity: 0.98; }
}

@keyframes turn-on {
  0% { transform: scale(1, 0.002); opacity: 0; filter: brightness(30); }
  50% { transform: scale(1, 0.002); opacity: 1; filter: brightness(10); }
  100% { transform: scale(1, 1); opacity: 1; filter: brightness(1); }
}

/* === Boot intro === */
.boot {
  height: 100vh;
  width: 100vw;
  overflow: hidden;
}

.boot--off { background: #000; }

.boot--bios {
  display: flex;
  flex-direction: column;
  padding: 2.5rem;
  background: #0a0a0a;
  color: #22c55e;
  font-family: 'VT323', monospace;
  font-size: 1.5rem;
  text-transform: uppercase;
  animation: turn-on 0.4s ease-out forwards;
}

.boot__vendor {
  margin-bottom: 2rem;
  font-weight: bold;
}

.boot__line {
  animation: fade-in var(--transition-normal);
}

.boot__cursor {
  margin-top: auto;
  animation: fade-in 1s ease-in-out infinite alternate;
}

.boot--logo {
  display: flex;
  align-items: center;
  justify-content: center;
  background: #fff;
  color: #000;
}

.boot__logo {
  text-align: center;
  animation: logo-in 1.5s ease-out both;
}

@keyframes logo-in {
  from { transform: scale(0.8); opacity: 0; }
  to { transform: scale(1); opacity: 1; }
}

.boot__logo-title {
  font-family: 'Press Start 2P', cursive;
  font-size: 3rem;
  letter-spacing: -0.05em;
}

.boot__logo-subtitle {
  font-family: 'Press Start 2P', cursive;
  font-size: 0.625rem;
  letter-spacing: 0.5em;
  margin-top: 0.5rem;
  color: #6b7280;
}

/* === Theme: database === */
.theme-database {
  --bg: #fafafa;
  --fg: #111111;
  --muted: #737373;
  --accent: #111111;
  --tile-bg: #ffffff;
  --tile-border: #e5e5e5;
  --bar-bg: #ffffff;
  --font-body: 'Helvetica Neue', Helvetica, Arial, sans-serif;
  --font-label: 'SF Mono', 'Consolas', monospace;
}

.theme-database .tile { border-width: 1px; animation: none; }
.theme-database .tile__label { font-size: 0.75rem; color: var(--muted); }
.theme-database .lightbox { background: #fff; }

/* === Theme: archive === */
.theme-archive {
  --bg: #050303;
  --fg: #d4d4d4;
  --muted: #7f1d1d;
  --accent: #b91c1c;
  --tile-bg: #0b0505;
  --tile-border: #3f0d0d;
  --bar-bg: #0b0505;
  --font-body: Georgia, 'Times New Roman', serif;
  --font-label: 'Courier New', monospace;
}

.theme-archive .gallery-header__title { color: #b91c1c; letter-spacing: 0.2em; text-transform: uppercase; }
.theme-archive .tile__img { filter: grayscale(0.6) contrast(1.2); }
.theme-archive .tile:hover .tile__img { filter: none; }
.theme-archive .tile__label { color: #b91c1c; }
.theme-archive .gallery-empty { color: #b91c1c; font-style: italic; }

/* === Theme: grid === */
.theme-grid .tile { border: none; }
.theme-grid .tile__label { color: var(--muted); font-size: 0.875rem; }
"#;

//! Global CSS styles for the invitation.
//!
//! Red and gold on cream paper; script headings, serif body text.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* RED (Envelope, headings) */
  --red: #8b0000;
  --red-deep: #5c0000;
  --red-glow: rgba(139, 0, 0, 0.35);

  /* GOLD (Seal, trims, accents) */
  --gold: #ffd700;
  --gold-soft: #d4af37;
  --gold-glow: rgba(255, 215, 0, 0.45);

  /* PAPER */
  --cream: #fdf5e6;
  --cream-dark: #f3e5c8;
  --ink: #3b2314;
  --ink-muted: rgba(59, 35, 20, 0.65);

  /* Typography */
  --font-script: 'Great Vibes', 'Dancing Script', cursive;
  --font-serif: 'Playfair Display', 'Noto Serif', Georgia, serif;
  --font-body: 'Montserrat', 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-gate: 1.5s cubic-bezier(0.7, 0, 0.3, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  min-height: 100%;
  background: var(--cream);
  color: var(--ink);
  font-family: var(--font-body);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

img {
  display: block;
  max-width: 100%;
}

button {
  font-family: inherit;
  cursor: pointer;
}

/* === Page === */
.invitation {
  position: relative;
  min-height: 100vh;
  overflow-x: hidden;
}

.paper-pattern {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  background-color: var(--cream);
  background-image:
    radial-gradient(circle at 1px 1px, rgba(139, 0, 0, 0.06) 1px, transparent 0),
    radial-gradient(circle at 50% 0%, rgba(255, 215, 0, 0.12), transparent 60%);
  background-size: 22px 22px, 100% 100%;
}

/* === Falling glitter === */
.glitter {
  position: fixed;
  inset: 0;
  z-index: 5;
  pointer-events: none;
  overflow: hidden;
}

.glitter__dot {
  position: absolute;
  top: -20px;
  border-radius: 50%;
  background: radial-gradient(circle, var(--gold) 0%, rgba(255, 215, 0, 0) 70%);
  opacity: 0.8;
  animation-name: fall;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

@keyframes fall {
  0%   { transform: translateY(0) rotate(0deg); opacity: 0; }
  10%  { opacity: 0.9; }
  100% { transform: translateY(105vh) rotate(360deg); opacity: 0; }
}

/* === Envelope === */
.envelope {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
}

.envelope__gate {
  position: absolute;
  top: 0;
  bottom: 0;
  width: 50%;
  background: linear-gradient(135deg, var(--red) 0%, var(--red-deep) 100%);
  box-shadow: inset 0 0 60px rgba(0, 0, 0, 0.35);
  transition: transform var(--transition-gate);
}

.envelope__gate--left {
  left: 0;
  border-right: 2px solid var(--gold-soft);
}

.envelope__gate--right {
  right: 0;
  border-left: 2px solid var(--gold-soft);
}

.envelope__trim {
  position: absolute;
  inset: 16px;
  border: 1px solid rgba(255, 215, 0, 0.4);
}

.envelope--opening .envelope__gate--left { transform: translateX(-100%); }
.envelope--opening .envelope__gate--right { transform: translateX(100%); }

.envelope__latch {
  position: relative;
  z-index: 2;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  cursor: pointer;
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.envelope__latch:hover { transform: scale(1.04); }

.envelope--opening .envelope__latch {
  opacity: 0;
  transform: scale(1.3);
  pointer-events: none;
}

.envelope__guest {
  text-align: center;
  color: var(--cream);
}

.envelope__guest-label {
  font-size: 0.8rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  opacity: 0.8;
}

.envelope__guest-name {
  font-family: var(--font-script);
  font-size: 2rem;
  color: var(--gold);
}

.envelope__cta {
  padding: 0.5rem 1.5rem;
  border: 1px solid var(--gold);
  border-radius: 999px;
  color: var(--gold);
  font-size: 0.85rem;
  letter-spacing: 0.25em;
  text-transform: uppercase;
  animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { box-shadow: 0 0 0 0 var(--gold-glow); }
  50%      { box-shadow: 0 0 0 10px rgba(255, 215, 0, 0); }
}

/* === Seal (囍) === */
.seal {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: radial-gradient(circle at 35% 35%, var(--gold) 0%, var(--gold-soft) 70%);
  color: var(--red);
}

.seal--large { width: 120px; height: 120px; font-size: 4rem; }
.seal--small { width: 44px; height: 44px; font-size: 1.4rem; }

.seal__ring {
  position: absolute;
  inset: 6px;
  border: 2px dashed rgba(139, 0, 0, 0.45);
  border-radius: 50%;
}

.seal__glyph {
  position: relative;
  font-family: var(--font-serif);
  line-height: 1;
}

.seal--glow {
  box-shadow: 0 0 24px var(--gold-glow), 0 0 60px rgba(255, 215, 0, 0.25);
}

/* === Toolbar === */
.toolbar {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 60;
  display: flex;
  gap: 0.5rem;
}

.icon-btn {
  width: 44px;
  height: 44px;
  display: flex;
  align-items: center;
  justify-content: center;
  border: 1px solid var(--gold-soft);
  border-radius: 50%;
  background: rgba(253, 245, 230, 0.9);
  color: var(--red);
  font-size: 1.2rem;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.icon-btn:hover {
  transform: scale(1.08);
  box-shadow: 0 0 12px var(--gold-glow);
}

.close-btn {
  width: 36px;
  height: 36px;
  border: none;
  border-radius: 50%;
  background: transparent;
  color: inherit;
  font-size: 1.6rem;
  line-height: 1;
}

.close-btn:hover { color: var(--gold); }

/* === Buttons === */
.btn-gold, .btn-outline, .btn-danger {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.4rem;
  padding: 0.6rem 1.4rem;
  border-radius: 999px;
  font-size: 0.9rem;
  font-weight: 600;
  transition: all var(--transition-fast);
}

.btn-gold {
  border: none;
  background: linear-gradient(135deg, var(--gold) 0%, var(--gold-soft) 100%);
  color: var(--red-deep);
}

.btn-gold:hover:not(:disabled) { box-shadow: 0 4px 16px var(--gold-glow); }

.btn-outline {
  border: 1px solid var(--gold-soft);
  background: transparent;
  color: var(--red);
}

.btn-outline:hover:not(:disabled) { background: rgba(255, 215, 0, 0.12); }

.btn-danger {
  border: 1px solid rgba(139, 0, 0, 0.3);
  background: transparent;
  color: var(--red);
  padding: 0.4rem 0.9rem;
}

.btn-danger:hover { background: rgba(139, 0, 0, 0.08); }

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Content === */
.content {
  position: relative;
  z-index: 1;
  opacity: 0;
  pointer-events: none;
  transition: opacity 1s ease;
}

.content--visible {
  opacity: 1;
  pointer-events: auto;
}

.reveal {
  opacity: 0;
  animation: reveal 0.9s ease forwards;
}

.content:not(.content--visible) .reveal { animation-play-state: paused; }

@keyframes reveal {
  from { opacity: 0; transform: translateY(24px); }
  to   { opacity: 1; transform: translateY(0); }
}

.section-title {
  margin-bottom: 1.5rem;
  font-family: var(--font-script);
  font-size: 2.4rem;
  font-weight: 400;
  color: var(--red);
  text-align: center;
}

/* === Hero === */
.hero {
  padding: 4rem 1.25rem 2rem;
  text-align: center;
}

.hero__titles { margin-bottom: 1.5rem; }

.hero__kicker {
  font-size: 0.75rem;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--ink-muted);
}

.hero__title {
  font-family: var(--font-serif);
  font-size: 2.6rem;
  color: var(--red);
}

.hero__guest {
  margin-top: 1rem;
  padding: 0.75rem 1rem;
  border-top: 1px solid var(--gold-soft);
  border-bottom: 1px solid var(--gold-soft);
}

.hero__guest-label {
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--ink-muted);
}

.hero__guest-name {
  font-family: var(--font-script);
  font-size: 2rem;
  font-weight: 400;
  color: var(--red);
}

.photo-frame {
  position: relative;
  margin: 0 auto 1.5rem;
  max-width: 320px;
  padding: 10px;
  border: 2px solid var(--gold-soft);
  border-radius: 160px 160px 12px 12px;
  background: #fff;
  box-shadow: 0 10px 30px rgba(139, 0, 0, 0.15);
}

.photo-frame img {
  width: 100%;
  aspect-ratio: 3 / 4;
  object-fit: cover;
  border-radius: 150px 150px 6px 6px;
}

.hero__names {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: 0.5rem 1rem;
}

.hero__name {
  font-family: var(--font-script);
  font-size: 2.4rem;
  color: var(--red);
}

.hero__heart {
  color: var(--gold-soft);
  font-size: 1.4rem;
}

.hero__message {
  flex-basis: 100%;
  margin-top: 1rem;
  font-family: var(--font-serif);
  font-style: italic;
  color: var(--ink-muted);
}

/* === Families === */
.families { padding: 2rem 1.25rem; }

.families__row {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
}

.families__divider {
  display: flex;
  justify-content: center;
}

.person {
  text-align: center;
  max-width: 320px;
}

.person__portrait {
  width: 140px;
  height: 140px;
  margin: 0 auto 1rem;
  border: 3px solid var(--gold-soft);
  border-radius: 50%;
  overflow: hidden;
}

.person__portrait img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.person__role {
  font-size: 0.8rem;
  letter-spacing: 0.25em;
  text-transform: uppercase;
  color: var(--ink-muted);
}

.person__name {
  font-family: var(--font-script);
  font-size: 2.2rem;
  font-weight: 400;
  color: var(--red);
}

.person__family { margin-top: 0.75rem; }

.person__side {
  font-family: var(--font-serif);
  color: var(--red);
}

.person__gift {
  margin-top: 1rem;
  padding: 0.75rem;
  border: 1px dashed var(--gold-soft);
  border-radius: 8px;
  background: rgba(255, 215, 0, 0.06);
}

.person__gift-label {
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--red);
}

.person__gift-account {
  font-family: var(--font-serif);
  white-space: pre-line;
}

/* === Details === */
.details { padding: 2rem 1.25rem; }

.details__card {
  padding: 2rem 1.25rem;
  border: 1px solid var(--gold-soft);
  border-radius: 12px;
  background: rgba(255, 255, 255, 0.7);
}

.details__columns {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  text-align: center;
}

.details__icon { font-size: 1.6rem; }

.details__date {
  font-family: var(--font-serif);
  font-size: 1.6rem;
  color: var(--red);
}

.details__time {
  font-size: 1.2rem;
  font-weight: 600;
}

.details__note, .details__address { color: var(--ink-muted); }

.details__rule {
  width: 60%;
  height: 1px;
  background: linear-gradient(90deg, transparent, var(--gold-soft), transparent);
}

.details__venue {
  font-family: var(--font-serif);
  font-size: 1.3rem;
  color: var(--red);
}

.btn-map {
  display: inline-block;
  margin-top: 0.75rem;
  padding: 0.5rem 1.2rem;
  border-radius: 999px;
  background: var(--red);
  color: var(--cream);
  text-decoration: none;
  font-size: 0.85rem;
}

.btn-map:hover { background: var(--red-deep); }

.details__letter {
  margin-top: 2rem;
  text-align: center;
  font-family: var(--font-serif);
  font-style: italic;
}

/* === Timeline === */
.timeline { margin-top: 2rem; }

.timeline__title {
  margin-bottom: 1rem;
  text-align: center;
  font-family: var(--font-serif);
  color: var(--red);
}

.timeline__track {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.timeline__track::before {
  content: "";
  position: absolute;
  top: 0;
  bottom: 0;
  left: 50%;
  width: 1px;
  background: var(--gold-soft);
}

.timeline__row {
  display: grid;
  grid-template-columns: 1fr 16px 1fr;
  align-items: center;
  gap: 0.75rem;
}

.timeline__row .timeline__activity { text-align: right; }
.timeline__row .timeline__time { text-align: left; }

.timeline__row--mirrored .timeline__activity { order: 3; text-align: left; }
.timeline__row--mirrored .timeline__time { order: 1; text-align: right; }
.timeline__row--mirrored .timeline__dot { order: 2; }

.timeline__dot {
  position: relative;
  width: 16px;
  height: 16px;
  border: 3px solid var(--gold);
  border-radius: 50%;
  background: var(--red);
}

.timeline__time {
  font-weight: 700;
  color: var(--red);
}

/* === Gallery === */
.gallery-section { padding: 2rem 1.25rem; }

.gallery {
  column-count: 2;
  column-gap: 0.75rem;
}

.gallery__item {
  position: relative;
  margin-bottom: 0.75rem;
  break-inside: avoid;
  border-radius: 8px;
  overflow: hidden;
  cursor: zoom-in;
}

.gallery__item img {
  width: 100%;
  aspect-ratio: 1 / 1;
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.gallery__item--tall img { aspect-ratio: 3 / 4; }

.gallery__item:hover img { transform: scale(1.05); }

.gallery__hover {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(139, 0, 0, 0.35);
  color: var(--cream);
  font-size: 1.5rem;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.gallery__item:hover .gallery__hover { opacity: 1; }

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 80;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.92);
  color: #fff;
  animation: fade-in 0.25s ease;
}

.lightbox .close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  color: #fff;
}

.lightbox__image {
  max-width: 92vw;
  max-height: 82vh;
  border-radius: 6px;
  box-shadow: 0 10px 40px rgba(0, 0, 0, 0.6);
}

.lightbox__nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  background: rgba(255, 255, 255, 0.12);
  border-color: transparent;
  color: #fff;
}

.lightbox__nav--prev { left: 0.75rem; }
.lightbox__nav--next { right: 0.75rem; }

@keyframes fade-in {
  from { opacity: 0; }
  to   { opacity: 1; }
}

/* === Footer === */
.footer {
  padding: 3rem 1.25rem 4rem;
  text-align: center;
  color: var(--ink-muted);
}

.footer__names {
  font-family: var(--font-script);
  font-size: 2rem;
  color: var(--red);
}

/* === Editor Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 90;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.6);
  animation: fade-in 0.2s ease;
}

.editor {
  display: flex;
  flex-direction: column;
  width: 100%;
  max-width: 720px;
  max-height: 92vh;
  border-radius: 12px;
  background: var(--cream);
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.4);
  overflow: hidden;
}

.editor__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.25rem;
  background: var(--red);
  color: var(--gold);
}

.editor__header h2 {
  font-family: var(--font-serif);
  font-size: 1.2rem;
}

.editor__body {
  flex: 1;
  overflow-y: auto;
  padding: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.editor__grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 0.75rem 1rem;
}

.editor__field, .editor__photo, .editor__block {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.editor__label {
  font-size: 0.75rem;
  font-weight: 600;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--red);
}

.editor__input {
  width: 100%;
  padding: 0.5rem 0.65rem;
  border: 1px solid var(--cream-dark);
  border-radius: 6px;
  background: #fff;
  color: var(--ink);
  font: inherit;
}

.editor__input:focus {
  outline: none;
  border-color: var(--gold-soft);
  box-shadow: 0 0 0 2px var(--gold-glow);
}

.editor__input--area {
  min-height: 90px;
  resize: vertical;
}

.editor__input--time { max-width: 110px; }

.editor__row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.editor__thumbs {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.editor__thumb-wrap { position: relative; }

.editor__thumb {
  width: 80px;
  height: 80px;
  object-fit: cover;
  border: 1px solid var(--cream-dark);
  border-radius: 6px;
}

.editor__thumb-remove {
  position: absolute;
  top: -6px;
  right: -6px;
  width: 22px;
  height: 22px;
  border: none;
  border-radius: 50%;
  background: var(--red);
  color: #fff;
  line-height: 1;
}

.editor__status {
  font-size: 0.85rem;
  color: var(--ink-muted);
}

.editor__footer {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
  padding: 1rem 1.25rem;
  border-top: 1px solid var(--cream-dark);
}

/* === Wider windows === */
@media (min-width: 720px) {
  .families__row {
    flex-direction: row;
    justify-content: center;
    align-items: flex-start;
  }

  .details__columns {
    flex-direction: row;
    justify-content: center;
    align-items: flex-start;
  }

  .details__rule {
    width: 1px;
    height: auto;
    align-self: stretch;
    background: linear-gradient(180deg, transparent, var(--gold-soft), transparent);
  }

  .gallery { column-count: 3; }
}
"#;

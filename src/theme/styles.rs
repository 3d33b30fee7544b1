//! Global CSS styles for AstroWeather.
//!
//! Cosmic purple dark theme.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT SKY (Backgrounds) */
  --night: #0F0F1E;
  --night-surface: #1A1A2E;
  --night-card: #1F1F33;
  --night-raised: #252538;
  --night-border: #2D2D3D;

  /* VIOLET (Primary accents) */
  --violet: #8B5CF6;
  --violet-soft: #A78BFA;
  --violet-bright: #C084FC;
  --violet-deep: #6B46C1;
  --violet-night: #4C1D95;

  /* TEXT */
  --text-primary: #E5E5E7;
  --text-secondary: rgba(229, 229, 231, 0.85);
  --text-muted: rgba(229, 229, 231, 0.6);

  /* SEMANTIC */
  --positive: #10B981;
  --challenging: #EF4444;
  --neutral: #F59E0B;

  /* Gradients */
  --gradient-primary: linear-gradient(135deg, #8B5CF6, #6B46C1, #4C1D95);
  --gradient-card: linear-gradient(135deg, #252538, #1F1F33, #1A1A2E);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
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
  font-family: var(--font-sans);
  background: var(--night);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === App Shell === */
.app-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  max-width: 430px;
  margin: 0 auto;
  background: var(--night);
}

.app-scroll {
  flex: 1;
  overflow-y: auto;
  padding-bottom: 80px;
}

/* === App Header === */
.app-header {
  background: var(--gradient-primary);
  padding: 1.25rem 1.5rem 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.app-title {
  font-size: var(--text-xl);
  font-weight: 700;
  color: #FFFFFF;
}

.app-subtitle {
  font-size: var(--text-sm);
  color: rgba(255, 255, 255, 0.8);
}

.header-actions {
  display: flex;
  gap: 0.5rem;
}

.header-btn {
  background: rgba(255, 255, 255, 0.15);
  color: #FFFFFF;
  border: none;
  border-radius: 20px;
  padding: 0.4rem 0.9rem;
  font-size: var(--text-sm);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.header-btn:hover {
  background: rgba(255, 255, 255, 0.25);
}

.header-btn:disabled {
  opacity: 0.6;
  cursor: default;
}

/* === Detail Page Header === */
.page-header {
  background: var(--gradient-primary);
  padding: 1rem 1.5rem;
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.back-btn {
  background: none;
  border: none;
  color: #FFFFFF;
  font-size: var(--text-lg);
  cursor: pointer;
  padding: 0.25rem;
}

.page-title {
  font-size: var(--text-lg);
  font-weight: 600;
  color: #FFFFFF;
}

.page-content {
  padding: 1rem;
}

.page-intro {
  color: var(--text-secondary);
  margin-bottom: 1.5rem;
  line-height: 1.6;
}

/* === Tab Bar === */
.tab-bar {
  position: fixed;
  bottom: 0;
  left: 50%;
  transform: translateX(-50%);
  width: 100%;
  max-width: 430px;
  height: 60px;
  display: flex;
  background: var(--night-card);
  border-top: 1px solid var(--night-border);
  z-index: 10;
}

.tab-item {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.15rem;
  color: #6B7280;
  text-decoration: none;
  font-size: var(--text-xs);
  transition: color var(--transition-fast);
}

.tab-item.active {
  color: var(--violet);
}

.tab-icon {
  font-size: 1.25rem;
  line-height: 1;
}

/* === Cards === */
.card {
  margin: 0.5rem 1rem;
  background: var(--night-card);
  border-radius: 12px;
  padding: 1rem;
}

.card-gradient {
  background: var(--gradient-card);
}

.card-title {
  font-size: var(--text-sm);
  font-weight: 600;
  letter-spacing: 1.5px;
  text-transform: uppercase;
  color: var(--text-secondary);
  text-align: center;
  margin-bottom: 1rem;
}

.section {
  background: var(--night-card);
  border-radius: 12px;
  padding: 1rem;
  margin-bottom: 1.25rem;
}

.section-title {
  color: var(--violet);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.section-body {
  color: var(--text-primary);
  line-height: 1.6;
}

/* === Dashboard Header Card === */
.dashboard-header {
  margin: 0.75rem 1rem;
  border-radius: 16px;
  background: var(--gradient-primary);
  padding: 1.25rem 1.5rem;
}

.welcome-text {
  font-size: 1.6rem;
  font-weight: 700;
  color: #FFFFFF;
  margin-bottom: 0.25rem;
}

.welcome-subtext {
  font-size: 0.95rem;
  color: rgba(229, 229, 231, 0.85);
  margin-bottom: 1rem;
}

.time-content {
  background: rgba(0, 0, 0, 0.2);
  border-radius: 12px;
  padding: 0.9rem 1rem;
  margin-bottom: 1rem;
}

.time-title {
  font-weight: 600;
  color: #FFFFFF;
  margin-bottom: 0.5rem;
}

.time-line {
  font-size: var(--text-sm);
  color: rgba(255, 255, 255, 0.9);
  margin-bottom: 0.25rem;
}

.time-line-label {
  color: var(--violet-bright);
  font-weight: 600;
  margin-right: 0.35rem;
}

.affirmation-label {
  font-size: var(--text-xs);
  letter-spacing: 1px;
  text-transform: uppercase;
  color: rgba(255, 255, 255, 0.7);
  margin-bottom: 0.25rem;
}

.affirmation-text {
  font-style: italic;
  color: #FFFFFF;
}

/* === Cosmic Score === */
.score-ring {
  width: 160px;
  height: 160px;
  margin: 0 auto 1rem;
  border-radius: 50%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  border: 10px solid var(--violet);
  background: var(--night-surface);
}

.score-emoji {
  font-size: 2.25rem;
}

.score-value {
  font-size: var(--text-xl);
  font-weight: 700;
  color: #FFFFFF;
}

.score-description {
  text-align: center;
  color: var(--violet-soft);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.score-details {
  text-align: center;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Moon Card === */
.moon-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 0.75rem;
}

.moon-phase-emoji {
  font-size: 2rem;
}

.moon-sign {
  font-size: var(--text-lg);
  font-weight: 600;
  color: #FFFFFF;
}

.moon-meta {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.moon-mood {
  color: var(--violet-soft);
  margin-bottom: 0.75rem;
}

.chip-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin-bottom: 0.5rem;
}

.chip {
  font-size: var(--text-xs);
  background: var(--night-raised);
  border-radius: 12px;
  padding: 0.2rem 0.6rem;
  color: var(--text-secondary);
}

.chip.good {
  border: 1px solid var(--positive);
}

.chip.avoid {
  border: 1px solid var(--challenging);
}

.chip-label {
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 1px;
  color: var(--text-muted);
  margin-bottom: 0.25rem;
}

/* === Life Areas === */
.life-area {
  display: flex;
  gap: 0.75rem;
  padding: 0.75rem 0;
}

.life-area + .life-area {
  border-top: 1px solid var(--night-border);
}

.life-area-emoji {
  font-size: 1.5rem;
}

.life-area-name {
  font-weight: 600;
  color: #FFFFFF;
}

.life-area-house {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.life-area-energy {
  font-size: var(--text-sm);
  color: var(--violet-soft);
  margin-bottom: 0.35rem;
}

/* === Transit Alerts === */
.alert {
  padding: 0.75rem 0;
}

.alert + .alert {
  border-top: 1px solid var(--night-border);
}

.alert-header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.35rem;
}

.alert-title {
  font-weight: 600;
  color: #FFFFFF;
  flex: 1;
}

.impact-badge {
  font-size: var(--text-xs);
  font-weight: 700;
  text-transform: uppercase;
  border-radius: 12px;
  padding: 0.15rem 0.55rem;
}

.impact-badge.positive {
  background: rgba(16, 185, 129, 0.2);
  color: var(--positive);
}

.impact-badge.challenging {
  background: rgba(239, 68, 68, 0.2);
  color: var(--challenging);
}

.impact-badge.neutral {
  background: rgba(245, 158, 11, 0.2);
  color: var(--neutral);
}

.alert-description {
  font-size: var(--text-sm);
  color: var(--text-secondary);
  margin-bottom: 0.25rem;
}

.alert-advice {
  font-size: var(--text-sm);
  font-style: italic;
  color: var(--text-muted);
}

/* === Retrograde === */
.planet-entry {
  padding: 0.75rem 0;
}

.planet-entry + .planet-entry {
  border-top: 1px solid var(--night-border);
}

.planet-header {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  margin-bottom: 0.35rem;
}

.planet-symbol {
  font-size: 1.4rem;
  width: 28px;
  text-align: center;
  color: var(--text-secondary);
}

.planet-name {
  font-weight: 600;
  color: #FFFFFF;
  flex: 1;
}

.status-badge {
  font-size: var(--text-xs);
  font-weight: 700;
  text-transform: uppercase;
  border-radius: 12px;
  padding: 0.15rem 0.55rem;
}

.status-badge.retrograde {
  background: rgba(239, 68, 68, 0.2);
  color: var(--challenging);
}

.status-badge.direct {
  background: rgba(16, 185, 129, 0.2);
  color: var(--positive);
}

.planet-dates {
  font-size: var(--text-sm);
  color: var(--text-muted);
  margin-left: 38px;
  margin-bottom: 0.25rem;
}

.planet-interpretation {
  font-size: var(--text-sm);
  font-style: italic;
  color: var(--text-primary);
  margin-left: 38px;
}

/* === Weekly Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(15, 15, 30, 0.8);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.25rem;
  z-index: 100;
}

.modal-content {
  width: 100%;
  max-width: 500px;
  max-height: 80vh;
  overflow-y: auto;
  background: var(--night-card);
  border-radius: 16px;
  padding: 1rem 1.25rem 1.25rem;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.75rem;
}

.modal-title {
  font-size: var(--text-lg);
  font-weight: 700;
  color: #FFFFFF;
}

.modal-close {
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-lg);
  cursor: pointer;
}

.chip-strip {
  display: flex;
  gap: 0.4rem;
  overflow-x: auto;
  padding-bottom: 0.5rem;
  margin-bottom: 1rem;
}

.day-chip {
  min-width: 52px;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.1rem;
  background: var(--night-raised);
  border-radius: 12px;
  padding: 0.5rem 0.4rem;
}

.day-chip-abbrev {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.day-chip-date {
  font-weight: 600;
  color: #FFFFFF;
}

.day-chip-emoji {
  font-size: 1.1rem;
}

.modal-section-title {
  color: var(--violet);
  font-weight: 600;
  margin: 0.75rem 0 0.5rem;
}

.modal-row {
  display: flex;
  gap: 0.6rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  padding: 0.3rem 0;
}

.modal-row-lead {
  color: var(--violet-soft);
  font-weight: 600;
  min-width: 64px;
}

/* === Misc === */
.refreshing-banner {
  text-align: center;
  font-size: var(--text-sm);
  color: var(--violet-soft);
  padding: 0.4rem 0;
}

.bottom-spacing {
  height: 20px;
}

.link-row {
  display: block;
  margin: 0.25rem 1rem 1rem;
  text-align: center;
  font-size: var(--text-sm);
  color: var(--violet-soft);
  text-decoration: none;
}

.link-row:hover {
  color: var(--violet-bright);
}
"#;

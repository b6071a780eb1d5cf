pub const STYLESHEET: &str = r##"
    :root {
      --bg: #0d1117; --bg-raised: #161b22; --bg-inset: #010409;
      --fg: #c9d1d9; --fg-muted: #8b949e; --fg-subtle: #484f58; --fg-bright: #f0f6fc;
      --accent: #0b5cff; --accent-muted: #1a3050;
      --green: #3fb950; --green-muted: #0d2818;
      --red: #f85149; --red-muted: #2d0000;
      --yellow: #d29922; --yellow-muted: #2d1f00;
      --border: #30363d;
      --sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
      --radius: 8px; --radius-sm: 4px;
      --transition: 0.2s ease;
      --nav-h: 52px;
    }
    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    body { font-family: var(--sans); background: var(--bg); color: var(--fg); line-height: 1.6; }
    .layout { display: grid; grid-template-columns: 260px 1fr; min-height: 100vh; }

    /* ── Sidebar ── */
    aside { background: var(--bg-raised); border-right: 1px solid var(--border); padding: 1.5rem 1.2rem; }
    aside .profile-photo { width: 220px; max-width: 100%; border-radius: 50%; margin-bottom: 1rem; }
    aside .brand { color: var(--fg-bright); font-size: 1.3rem; font-weight: 700; }
    aside p { color: var(--fg-muted); font-size: 0.85rem; }

    /* ── Navigation ── */
    nav {
      position: sticky; top: 0; z-index: 100;
      background: rgba(13,17,23,0.92); backdrop-filter: blur(12px);
      border-bottom: 1px solid var(--border);
      min-height: var(--nav-h); display: flex; flex-wrap: wrap; align-items: center;
      padding: 0 1.5rem; gap: 0.25rem;
    }
    nav form { display: inline; }
    .nav-button {
      color: var(--fg-muted); background: none; border: none; font-size: 0.85rem;
      padding: 0.35rem 0.7rem; border-radius: var(--radius-sm); cursor: pointer;
      transition: all var(--transition);
    }
    .nav-button:hover { color: var(--fg-bright); background: rgba(255,255,255,0.05); }
    .nav-button.active { color: var(--fg-bright); background: var(--accent-muted); }

    /* ── Main ── */
    main { max-width: 1080px; padding: 1.5rem 2rem; }
    .section-title { color: var(--fg-bright); font-size: 1.6rem; margin-bottom: 0.4rem; }
    .lead { color: var(--fg-muted); margin-bottom: 1rem; }
    h3 { color: var(--fg-bright); font-size: 1.05rem; margin: 0.6rem 0 0.3rem; }
    h4 { color: var(--fg-muted); font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.04em; margin: 0.8rem 0 0.3rem; }
    ul { padding-left: 1.2rem; }
    .hero-image { width: 100%; max-width: 520px; border-radius: var(--radius); margin-top: 1rem; }

    /* ── Cards ── */
    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 0.75rem; }
    .card {
      background: var(--bg-raised); border: 1px solid var(--border); border-radius: var(--radius);
      padding: 0.8rem 1rem; border-top: 3px solid var(--accent);
    }
    .card-label { font-size: 0.72rem; color: var(--fg-muted); text-transform: uppercase; letter-spacing: 0.04em; }
    .chips { display: flex; flex-wrap: wrap; gap: 0.35rem; margin: 0.4rem 0; }
    .chip { background: var(--accent-muted); color: var(--fg-bright); font-size: 0.72rem; padding: 0.1rem 0.55rem; border-radius: 999px; }

    /* ── Projects ── */
    .project-card { background: var(--bg-raised); border: 1px solid var(--border); border-radius: var(--radius); margin-bottom: 0.8rem; }
    .project-card summary { cursor: pointer; padding: 0.8rem 1rem; list-style: none; }
    .project-title { display: inline; margin: 0; }
    .project-subtitle { color: var(--fg-muted); font-size: 0.8rem; margin-left: 0.6rem; }
    .project-body { padding: 0 1rem 1rem; }
    .project-thumb { width: 100%; max-width: 480px; border-radius: var(--radius-sm); }
    .tools-grid td { padding: 0.2rem 1rem 0.2rem 0; font-size: 0.85rem; }

    /* ── Tables ── */
    table { border-collapse: collapse; }
    .records { width: 100%; font-size: 0.85rem; }
    .records th { text-align: left; color: var(--fg-muted); font-size: 0.7rem; text-transform: uppercase; border-bottom: 1px solid var(--border); padding: 0.4rem; }
    .records td { padding: 0.4rem; border-bottom: 1px solid rgba(48,54,61,0.5); }

    /* ── Buttons & notices ── */
    .link-button {
      display: inline-block; background-color: var(--accent); color: white; padding: 8px 16px;
      border-radius: 8px; margin: 4px; text-decoration: none; font-size: 0.85rem;
    }
    .notice { border-radius: var(--radius-sm); padding: 0.6rem 0.9rem; margin: 0.6rem 0; font-size: 0.85rem; }
    .notice-info { background: var(--accent-muted); }
    .notice-success { background: var(--green-muted); color: var(--green); }
    .notice-warning { background: var(--yellow-muted); color: var(--yellow); }
    .notice-error { background: var(--red-muted); color: var(--red); }

    /* ── Contact ── */
    .contact-form { display: grid; gap: 0.5rem; max-width: 520px; margin-top: 1rem; }
    .contact-form input, .contact-form textarea {
      background: var(--bg-inset); color: var(--fg); border: 1px solid var(--border);
      border-radius: var(--radius-sm); padding: 0.45rem 0.6rem; font: inherit;
    }
    .contact-form button { justify-self: start; background: var(--accent); color: white; border: none; border-radius: 8px; padding: 8px 16px; cursor: pointer; }
    .demo-frame { width: 100%; height: 560px; border: 1px solid var(--border); border-radius: var(--radius); }

    footer { color: var(--fg-subtle); font-size: 0.75rem; padding: 2rem; border-top: 1px solid var(--border); }
    @media (max-width: 820px) { .layout { grid-template-columns: 1fr; } }
"##;

use crate::metrics::{format_days_left, group_thousands};
use crate::models::{LifeMetrics, UserProfile};
use crate::profile::{MAX_LIFESPAN_YEARS, MIN_LIFESPAN_YEARS};
use crate::scenes::scene_for;

pub fn render_setup(errors: &[String]) -> String {
    let error_block = if errors.is_empty() {
        String::new()
    } else {
        let items: String = errors
            .iter()
            .map(|message| format!("<p>{}</p>", escape_html(message)))
            .collect();
        format!(r#"<div class="errors" role="alert">{items}</div>"#)
    };

    SETUP_HTML
        .replace("{{STYLE}}", BASE_STYLE)
        .replace("{{MIN_LIFESPAN}}", &MIN_LIFESPAN_YEARS.to_string())
        .replace("{{MAX_LIFESPAN}}", &MAX_LIFESPAN_YEARS.to_string())
        .replace("{{ERRORS}}", &error_block)
}

pub fn render_dashboard(user: &UserProfile, metrics: &LifeMetrics) -> String {
    let scene = scene_for(metrics.scene);
    // The bar only has room for 0..=100 even though the figure is unclamped.
    let bar_width = metrics.life_progress_percent.clamp(0.0, 100.0);

    DASHBOARD_HTML
        .replace("{{STYLE}}", BASE_STYLE)
        .replace("{{SCENE_ID}}", scene.id)
        .replace("{{TOP}}", scene.palette[0])
        .replace("{{MIDDLE}}", scene.palette[1])
        .replace("{{BOTTOM}}", scene.palette[2])
        .replace("{{ICON}}", scene.icon)
        .replace("{{TITLE}}", scene.title)
        .replace("{{SCENE_TEXT}}", scene.text)
        .replace("{{LONG_TEXT}}", scene.long_text)
        .replace("{{DATE}}", &metrics.formatted_date)
        .replace("{{DAY_NUMBER}}", &group_thousands(metrics.days_since_birth))
        .replace("{{QUOTE}}", metrics.quote)
        .replace("{{PROGRESS}}", &format!("{:.2}", metrics.life_progress_percent))
        .replace("{{BAR_WIDTH}}", &format!("{bar_width:.2}"))
        .replace("{{DAYS_LEFT}}", &format_days_left(metrics.days_remaining))
        .replace("{{NAME}}", &escape_html(user.name()))
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const BASE_STYLE: &str = r#"
    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      font-family: "PingFang SC", "Noto Sans SC", "Microsoft YaHei", sans-serif;
      display: grid;
      place-items: center;
      padding: 24px 16px;
    }

    button {
      font: inherit;
      cursor: pointer;
      border: none;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(16px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
"#;

const SETUP_HTML: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>生命计算器</title>
  <style>
    {{STYLE}}

    body {
      background: #f3f4f6;
      color: #1f2937;
    }

    .card {
      width: min(520px, 100%);
      background: #fff;
      border-radius: 16px;
      box-shadow: 0 18px 40px rgba(15, 23, 42, 0.12);
      padding: 32px;
      animation: rise 500ms ease;
    }

    h1 {
      text-align: center;
      margin: 0 0 28px;
      font-size: 1.9rem;
    }

    form {
      display: grid;
      gap: 20px;
    }

    label {
      font-size: 1.05rem;
      font-weight: 500;
    }

    input {
      width: 100%;
      margin-top: 8px;
      padding: 12px;
      border: 1px solid #d1d5db;
      border-radius: 10px;
      font: inherit;
    }

    input:focus {
      outline: 2px solid #3b82f6;
      border-color: transparent;
    }

    .errors {
      background: #fef2f2;
      border-radius: 10px;
      padding: 12px 16px;
      color: #ef4444;
    }

    .errors p {
      margin: 4px 0;
    }

    .submit {
      padding: 16px;
      border-radius: 10px;
      background: #2563eb;
      color: #fff;
      font-size: 1.05rem;
      font-weight: 600;
    }

    .submit:hover {
      background: #1d4ed8;
    }
  </style>
</head>
<body>
  <main class="card">
    <h1>生命计算器</h1>
    <form method="post" action="/user">
      <div>
        <label for="name">你的名字</label>
        <input type="text" name="name" id="name" placeholder="请输入你的名字" required />
      </div>
      <div>
        <label for="birth_date">出生日期</label>
        <input type="date" name="birth_date" id="birth_date" required />
      </div>
      <div>
        <label for="expected_lifespan">预期寿命</label>
        <input type="number" name="expected_lifespan" id="expected_lifespan"
          min="{{MIN_LIFESPAN}}" max="{{MAX_LIFESPAN}}" placeholder="请输入预期寿命（年）" required />
      </div>
      {{ERRORS}}
      <button class="submit" type="submit">开始计算</button>
    </form>
  </main>
</body>
</html>
"#;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>生命跃进计时器</title>
  <style>
    {{STYLE}}

    body {
      background: linear-gradient(180deg, {{TOP}}, {{MIDDLE}} 50%, {{BOTTOM}});
      color: #fff;
    }

    .app {
      width: min(440px, 100%);
      min-height: calc(100vh - 48px);
      display: flex;
      flex-direction: column;
      justify-content: space-between;
      gap: 24px;
      animation: rise 600ms ease;
    }

    .header {
      border-radius: 18px;
      overflow: hidden;
      backdrop-filter: blur(12px);
    }

    .header-top {
      background: rgba(88, 28, 135, 0.8);
      padding: 16px;
      text-align: center;
    }

    .header-top h1 {
      margin: 0 0 6px;
      font-size: 1.5rem;
    }

    .header-top p {
      margin: 2px 0;
      font-size: 0.9rem;
      opacity: 0.9;
    }

    .scene-bar {
      background: rgba(0, 0, 0, 0.2);
      padding: 12px 16px;
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .scene-bar h2 {
      margin: 0;
      font-size: 1.1rem;
    }

    .icon-btn {
      padding: 8px 12px;
      border-radius: 999px;
      background: rgba(255, 255, 255, 0.12);
      color: #fff;
    }

    .icon-btn:hover {
      background: rgba(255, 255, 255, 0.22);
    }

    .counter {
      width: 176px;
      height: 176px;
      margin: 0 auto;
      border-radius: 50%;
      border: 1px solid rgba(255, 255, 255, 0.3);
      background: rgba(0, 0, 0, 0.3);
      color: #fff;
      display: grid;
      place-content: center;
      text-align: center;
    }

    .counter strong {
      font-size: 2.2rem;
    }

    .counter span {
      font-size: 0.85rem;
      margin-top: 6px;
    }

    details.quote {
      border-radius: 18px;
      background: rgba(0, 0, 0, 0.4);
      padding: 20px;
      text-align: center;
      line-height: 1.7;
    }

    details.quote summary {
      list-style: none;
      cursor: pointer;
    }

    details.quote summary p {
      font-size: 1.1rem;
      font-weight: 500;
      margin: 0 0 12px;
    }

    details.quote .hint::after {
      content: "点击展开查看更多";
      font-size: 0.85rem;
      opacity: 0.7;
    }

    details.quote[open] .hint::after {
      content: "点击收起";
    }

    .progress {
      border-radius: 18px;
      border: 1px solid rgba(255, 255, 255, 0.2);
      background: rgba(255, 255, 255, 0.1);
      padding: 16px;
    }

    .progress-labels {
      display: flex;
      justify-content: space-between;
      font-size: 0.85rem;
      margin-bottom: 8px;
    }

    .track {
      height: 8px;
      border-radius: 999px;
      background: rgba(255, 255, 255, 0.2);
      overflow: hidden;
    }

    .fill {
      height: 100%;
      border-radius: 999px;
      background: linear-gradient(90deg, rgba(255, 255, 255, 0.8), rgba(255, 255, 255, 0.6));
    }

    .nav {
      display: flex;
      justify-content: space-between;
      padding: 0 16px;
    }

    form {
      margin: 0;
    }
  </style>
</head>
<body data-scene="{{SCENE_ID}}">
  <main class="app">
    <section class="header">
      <div class="header-top">
        <h1>生命跃进计时器</h1>
        <p>你好，{{NAME}}！</p>
        <p>{{DATE}}</p>
      </div>
      <div class="scene-bar">
        <h2>{{ICON}} {{TITLE}}</h2>
        <form method="post" action="/user/reset">
          <button class="icon-btn" type="submit" title="重置信息">↻</button>
        </form>
      </div>
    </section>

    <section>
      <form method="post" action="/day/today">
        <button class="counter" type="submit" title="点击后返回到今天">
          <strong>{{DAY_NUMBER}}</strong>
          <span>人生进行时</span>
        </button>
      </form>
    </section>

    <details class="quote">
      <summary>
        <p>{{QUOTE}}</p>
        <span class="hint"></span>
      </summary>
      <p>{{SCENE_TEXT}}</p>
      <p>{{LONG_TEXT}}</p>
    </details>

    <section>
      <div class="progress">
        <div class="progress-labels">
          <span>已度过时光 {{PROGRESS}}%</span>
          <span>剩余 {{DAYS_LEFT}}</span>
        </div>
        <div class="track">
          <div class="fill" style="width: {{BAR_WIDTH}}%"></div>
        </div>
      </div>
      <div class="nav">
        <form method="post" action="/day/prev">
          <button class="icon-btn" type="submit" title="前一天">‹</button>
        </form>
        <form method="post" action="/day/next">
          <button class="icon-btn" type="submit" title="后一天">›</button>
        </form>
      </div>
    </section>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_life_metrics;
    use crate::models::ProfileForm;
    use crate::profile::validate_profile;
    use chrono::NaiveDate;

    #[test]
    fn setup_lists_errors_escaped() {
        let html = render_setup(&["<b>bad</b>".to_string()]);
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
        assert!(html.contains(r#"max="150""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn dashboard_shows_metrics_and_scene() {
        let user = validate_profile(&ProfileForm {
            name: "Tom & Jerry".to_string(),
            birth_date: "2000-01-01".to_string(),
            expected_lifespan: "80".to_string(),
            id: None,
        })
        .unwrap();
        let reference = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let metrics = compute_life_metrics(&user, reference);

        let html = render_dashboard(&user, &metrics);
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("8,766"));
        assert!(html.contains("2024年1月1日星期一"));
        assert!(html.contains(r#"data-scene="dusk""#));
        assert!(html.contains(metrics.quote));
        assert!(!html.contains("{{"));
    }
}

//! Built-in Dataset
//!
//! The board shown on first run. Also the reference table for backfilling
//! fields that older stored records lack.

use crate::models::{Bookmark, Category};

/// (id, title, url, quota info, app url)
type BookmarkRow = (&'static str, &'static str, &'static str, &'static str, Option<&'static str>);

/// (id, title, color, bookmarks)
type CategoryRow = (&'static str, &'static str, &'static str, &'static [BookmarkRow]);

const DEFAULT_BOARD: &[CategoryRow] = &[
    ("ai-chat", "Chat & Assistant", "bg-blue-500", &[
        ("chatgpt", "ChatGPT", "https://chat.openai.com", "免費版每月有使用限制", None),
        ("gemini", "Gemini", "https://gemini.google.com", "免費版每日 60 次查詢", None),
        ("claude", "Claude", "https://claude.ai", "免費版每日有對話限制", None),
        ("perplexity", "Perplexity", "https://perplexity.ai", "免費版每日 5 次 Pro 搜尋", None),
        ("copilot", "Microsoft Copilot", "https://copilot.microsoft.com", "免費版有功能限制", None),
        ("grok", "Grok", "https://grok.com", "X Premium 用戶專享", None),
        ("deepseek", "DeepSeek", "https://chat.deepseek.com", "免費版有使用限制", None),
        ("kuse-ai", "Kuse.ai", "https://kuse.ai", "每日免費 10 次查詢", None),
        ("felo-ai", "Felo", "https://felo.ai", "每日贈送 200 點數", None),
    ]),
    ("ai-browser", "AI Browser", "bg-orange-500", &[
        ("comet-browser", "Comet Browser", "https://comet.perplexity.ai", "Perplexity 推出的 AI 瀏覽器", None),
        ("atlas-browser", "Atlas Browser", "https://chatgpt.com/zh-Hant/atlas/", "OpenAI 推出的 AI 瀏覽器", None),
        ("fello-browser", "Fello AI", "https://fello.ai", "AI 驅動的智能瀏覽器", None),
    ]),
    ("ai-agents", "AI Agents", "bg-emerald-600", &[
        ("langchain", "LangChain", "https://langchain.com", "開源框架免費使用", None),
        ("firecrawl", "Firecrawl", "https://firecrawl.dev/agent", "5 free daily runs", None),
        ("dify-ai", "Dify AI", "https://dify.ai", "開源平台，支援雲端或自架", None),
        ("genspark", "Genspark", "https://www.genspark.ai/", "100 credits/day", None),
        ("crew-ai", "CrewAI", "https://crewai.com", "免費版有使用限制", None),
        ("autogen", "AutoGen", "https://microsoft.github.io/autogen", "微軟開源專案", None),
    ]),
    ("no-code", "No-Code", "bg-violet-500", &[
        ("lovable-dev", "Lovable.dev", "https://lovable.dev", "每月免費 5 個專案", None),
        ("replit", "Replit", "https://replit.com", "免費版 500MB 儲存空間", None),
        ("v0-dev", "v0.dev", "https://v0.dev", "每月免費 200 次生成", None),
        ("glide", "Glide", "https://glideapps.com", "1 editor", Some("https://shareholder-gift.glide.page")),
        ("webflow", "Webflow", "https://webflow.com", "免費版 2 個專案", None),
        ("framer", "Framer", "https://framer.com", "免費版 3 個網站", None),
        ("wix", "Wix Studio", "https://wix.com/studio", "免費版有 Wix 品牌", None),
        ("adalo", "Adalo", "https://adalo.com", "200 Records Per App", None),
    ]),
    ("low-code", "Low-Code", "bg-indigo-500", &[
        ("retool", "Retool", "https://retool.com", "免費版 5 個用戶", None),
        ("supabase", "Supabase", "https://supabase.com", "免費版 500MB 資料庫", None),
        ("firebase", "Firebase", "https://firebase.google.com", "免費版 Spark 方案", None),
        ("airtable", "Airtable", "https://airtable.com", "免費版 1200 筆記錄", None),
    ]),
    ("ide", "IDE", "bg-slate-600", &[
        ("vscode", "Visual Studio Code", "https://code.visualstudio.com", "完全免費使用", None),
        ("antigravity", "Antigravity", "https://antigravity.google/", "Generous weekly rate limits", None),
        ("kiro-dev", "Kiro.dev", "https://kiro.dev", "50 credits", None),
        ("warp-dev", "Warp.dev", "https://warp.dev", "免費版有功能限制", None),
        ("cursor", "Cursor", "https://cursor.sh", "AI 原生編輯器", None),
        ("windsurf", "Windsurf", "https://codeium.com/windsurf", "AI-first IDE，免費使用", None),
    ]),
    ("ide-extensions", "IDE Extensions", "bg-zinc-500", &[
        ("github-copilot", "GitHub Copilot", "https://github.com/features/copilot", "免費版每月 2000 次補全", None),
        ("continue-dev", "Continue.dev", "https://continue.dev", "bring your own API keys", None),
    ]),
    ("ai-automation", "Automation", "bg-amber-500", &[
        ("refly-ai", "Refly.ai", "https://refly.ai", "每日可獲取新積分: 100點", None),
        ("relay-app", "Relay.app", "https://relay.app", "500 free AI credits/mo", None),
        ("zapier-ai", "Zapier", "https://zapier.com/ai", "100 tasks per month", None),
        ("make-ai", "Make.com", "https://make.com", "1,000 credits/month", None),
    ]),
    ("ai-design", "Design & Creative", "bg-rose-500", &[
        ("midjourney", "Midjourney", "https://midjourney.com", "免費試用 25 張圖片", None),
        ("stable-diffusion", "Stable Diffusion", "https://stablediffusionweb.com", "每日可獲取新積分: 20點", None),
        ("canva-ai", "Canva AI", "https://canva.com/ai", "免費版每月 50 次 AI 生成", None),
        ("figma-ai", "Figma AI", "https://figma.com", "免費版有功能限制", None),
    ]),
    ("ai-productivity", "Productivity", "bg-teal-500", &[
        ("notion-ai", "Notion AI", "https://notion.so/ai", "免費版每月 20 次 AI 回應", None),
        ("gamma", "Gamma", "https://gamma.app", "免費版每月 400 AI 點數", None),
        ("wayin-ai", "Wayin AI", "https://wayin.ai", "每天免費工具點數: 30", None),
    ]),
];

fn build_bookmark(row: &BookmarkRow) -> Bookmark {
    let (id, title, url, quota_info, app_url) = *row;
    Bookmark {
        id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        favicon: None,
        description: None,
        quota_info: Some(quota_info.to_string()),
        app_url: app_url.map(str::to_string),
    }
}

/// The first-run board
pub fn default_categories() -> Vec<Category> {
    DEFAULT_BOARD
        .iter()
        .map(|(id, title, color, bookmarks)| Category {
            id: id.to_string(),
            title: title.to_string(),
            color: color.to_string(),
            bookmarks: bookmarks.iter().map(build_bookmark).collect(),
        })
        .collect()
}

/// Built-in entry for (category, bookmark), if any
pub fn default_bookmark(category_id: &str, bookmark_id: &str) -> Option<Bookmark> {
    DEFAULT_BOARD
        .iter()
        .find(|(id, ..)| *id == category_id)
        .and_then(|(_, _, _, bookmarks)| bookmarks.iter().find(|row| row.0 == bookmark_id))
        .map(build_bookmark)
}

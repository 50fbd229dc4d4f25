//! Prompt text sent to the generator.
//!
//! The system prompt fixes the `[TEACHES]` / `[REQUIRES]` micro-format and
//! the candidate style (short Japanese noun phrases, no goal sentences). The
//! user prompt wraps one syllabus between delimiter rules. Course code and
//! title are never included.

/// Placeholder replaced by the syllabus text in [`USER_PROMPT_TEMPLATE`].
pub const SYLLABUS_PLACEHOLDER: &str = "{SYLLABUS_TEXT}";

/// System message for every request.
pub const SYSTEM_PROMPT: &str = r#"
あなたは大学カリキュラム分析の専門家です。
与えられたシラバスのテキストから、
(1) 授業で扱う概念（Teaches）
(2) 履修に必要な前提知識（Requires）
のみを日本語を用いて箇条書きで抽出してください。

必ず次のテキスト形式「のみ」を出力してください。余計な説明文は一切書かないこと。

[TEACHES]
- （この授業で新たに学ぶ重要な概念・知識・スキルの候補を重要度の高い順に最大5個）

[REQUIRES]
- （この授業を受ける前に知っていることが望ましい概念・知識・スキルの候補を最大5個）


制約:
- [TEACHES]は「授業概要・到達目標・授業計画」からこの科目の中心となる基礎概念上位5個を抽出する。

- 科目名・授業名に含まれる重要な専門用語はこの授業の中核概念とみなし、必ず [TEACHES] の最上位に含めること。

- [REQUIRES]は「履修条件・前提知識・この授業を受けるために必要な事項」などの記述に基づいて抽出すること。
  → 履修条件や前提知識に関する記述がほとんど無い場合、[REQUIRES] は空欄でもよい
  → 授業で扱う内容（TEACHESに入るべき概念）を、前提知識として推測してはいけない。

- 5〜30 文字程度の「名詞句」とし、「〜すること」「〜ができるようになる」などの文章や目標文は避ける。

- 「意欲」「態度」「レポート提出」「授業に参加すること」などの行動・態度・運用ルールは含めない。

- 教員名・曜日・教室など「学ぶ概念ではない情報」は含めない。

- [REQUIRES]に含めてよいのは、授業開始前に既に知っていることが期待されている内容だけとする。

"#;

/// User message template; see [`user_prompt`].
pub const USER_PROMPT_TEMPLATE: &str = r#"
以下は1つの授業のシラバス情報です。
この授業について、[TEACHES] / [REQUIRES] 形式で出力してください。

======== シラバス情報 ========
{SYLLABUS_TEXT}
==============================
"#;

/// Build the user message for one syllabus.
///
/// Only the first placeholder is substituted, so braces inside the syllabus
/// text pass through untouched.
pub fn user_prompt(syllabus_text: &str) -> String {
    USER_PROMPT_TEMPLATE.replacen(SYLLABUS_PLACEHOLDER, syllabus_text, 1)
}

//! 터미널 출력 포맷팅 유틸리티
//!
//! 서비스 레지스트리 초기화 과정을 터미널에 보여주는 출력 함수들입니다.
//! 각 `print_*` 함수는 같은 이름의 `format_*` 함수가 만든 문자열을 출력합니다.
//!
//! ```text
//! ╔══════════════════════════════════════════════════╗
//! ║         🔄 INITIALIZING SERVICE REGISTRY         ║
//! ╚══════════════════════════════════════════════════╝
//! → Step 1: Creating Repository instances
//!    ├─ comic_book_repository: ✓ Created
//!    ├─ user_repository: ✓ Created
//! ✓ Step 1: Repository instances created (2 items)
//! ```

/// 박스 내부 폭 (문자 수)
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싼 제목 문자열을 만듭니다.
///
/// 제목은 가운데 정렬되며, 박스보다 긴 제목은 그대로 둡니다.
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH - 1
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

/// `→ Step 1: Creating Repository instances`
pub fn format_step_start(step: u8, description: &str) -> String {
    format!("→ Step {}: {}", step, description)
}

pub fn print_step_start(step: u8, description: &str) {
    println!("{}", format_step_start(step, description));
}

/// `✓ Step 1: Repository instances created (2 items)`
pub fn format_step_complete(step: u8, description: &str, count: usize) -> String {
    let unit = if count == 1 { "item" } else { "items" };
    format!("✓ Step {}: {} ({} {})", step, description, count, unit)
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("{}", format_step_complete(step, description, count));
}

/// 트리 형태로 들여쓴 하위 작업 한 줄
pub fn format_sub_task(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("{}", format_sub_task(name, status));
}

/// 레지스트리 초기화 완료 요약
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          🎉 SERVICE REGISTRY INITIALIZED         ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Repositories: 2
///    🔧 Services: 3
///    🚀 Total Components: 5
/// ```
pub fn format_final_summary(repos: usize, services: usize) -> String {
    format!(
        "{}\n   📦 Repositories: {}\n   🔧 Services: {}\n   🚀 Total Components: {}",
        format_boxed_title("🎉 SERVICE REGISTRY INITIALIZED"),
        repos,
        services,
        repos + services
    )
}

pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    println!("{}", format_final_summary(repos, services));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_has_three_lines() {
        let boxed = format_boxed_title("Service Registry");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        assert!(lines[1].contains("Service Registry"));
        assert!(lines[2].starts_with('╚') && lines[2].ends_with('╝'));
    }

    #[test]
    fn test_step_complete_pluralizes() {
        assert_eq!(
            format_step_complete(1, "Repository instances created", 1),
            "✓ Step 1: Repository instances created (1 item)"
        );
        assert_eq!(
            format_step_complete(2, "Service instances created", 3),
            "✓ Step 2: Service instances created (3 items)"
        );
    }

    #[test]
    fn test_final_summary_totals() {
        let summary = format_final_summary(2, 3);

        assert!(summary.contains("📦 Repositories: 2"));
        assert!(summary.contains("🔧 Services: 3"));
        assert!(summary.contains("🚀 Total Components: 5"));
    }

    #[test]
    fn test_sub_task_format() {
        assert_eq!(
            format_sub_task("comic_book_repository", "✓ Created"),
            "   ├─ comic_book_repository: ✓ Created"
        );
    }
}

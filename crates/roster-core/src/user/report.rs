//! Plain-text user report.

use super::model::User;

pub const REPORT_HEADER: &str = "--- Relatório de Usuários ---";
pub const EMPTY_REPORT_LINE: &str = "Nenhum usuário cadastrado.";
const BLOCK_SEPARATOR: &str = "----------";

/// Renders the report for `users`, one block per user in the given order.
///
/// Every block contains a `Nome: <nome>` and a `Status: <status>` line.
pub fn render_report(users: &[User]) -> String {
    let mut lines = vec![REPORT_HEADER.to_string()];

    if users.is_empty() {
        lines.push(EMPTY_REPORT_LINE.to_string());
        return lines.join("\n");
    }

    for user in users {
        lines.push(format!("ID: {}", user.id));
        lines.push(format!("Nome: {}", user.nome));
        lines.push(format!("Email: {}", user.email));
        lines.push(format!("Idade: {}", user.idade));
        lines.push(format!("Admin: {}", if user.is_admin { "Sim" } else { "Não" }));
        lines.push(format!("Status: {}", user.status));
        lines.push(BLOCK_SEPARATOR.to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::model::UserStatus;
    use chrono::Utc;

    fn user(id: &str, nome: &str, status: UserStatus) -> User {
        User {
            id: id.to_string(),
            nome: nome.to_string(),
            email: format!("{}@example.com", nome.to_lowercase()),
            idade: 30,
            is_admin: false,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_report() {
        let report = render_report(&[]);
        assert_eq!(report, "--- Relatório de Usuários ---\nNenhum usuário cadastrado.");
    }

    #[test]
    fn test_report_keeps_given_order() {
        let users = vec![
            user("1", "Alice", UserStatus::Ativo),
            user("2", "Bob", UserStatus::Inativo),
        ];

        let report = render_report(&users);

        assert!(report.starts_with(REPORT_HEADER));
        assert!(!report.contains(EMPTY_REPORT_LINE));
        assert!(report.contains("Nome: Alice\n"));
        assert!(report.contains("Status: inativo"));
        assert!(report.contains("Admin: Não"));
        let alice = report.find("Nome: Alice").unwrap();
        let bob = report.find("Nome: Bob").unwrap();
        assert!(alice < bob);
    }
}

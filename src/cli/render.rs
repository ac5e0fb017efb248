//! Terminal rendering of a family
//!
//! The highlighted student is drawn bold and reversed. Output respects
//! NO_COLOR / CLICOLOR through `colored`.

use colored::Colorize;
use itertools::Itertools;
use termtree::Tree;

use crate::application::Family;
use crate::domain::{Generation, Generations, Student};

/// One block per generation: header, boxed names, connector lines.
pub fn render_rows(family: &Family, show_links: bool) -> String {
    let generations = &family.generations;
    let mut lines = Vec::new();

    for (row, generation) in generations.iter().enumerate() {
        lines.push(header(generation).cyan().bold().to_string());

        let boxes = generation
            .students
            .iter()
            .map(|s| name_box(s, family.query.as_ref()))
            .join("  ");
        lines.push(format!("  {boxes}"));

        if show_links {
            lines.extend(
                connector_lines(generations, row)
                    .into_iter()
                    .map(|line| format!("    {}", line.dimmed())),
            );
        }
    }
    lines.into_iter().map(|line| line + "\n").collect()
}

/// Indented descent from every student without a parent in the row above.
pub fn render_tree(family: &Family) -> String {
    let generations = &family.generations;

    generations
        .iter()
        .enumerate()
        .flat_map(|(row, generation)| {
            let linked: Vec<usize> = match row.checked_sub(1) {
                Some(above) => generations.links(above).iter().map(|l| l.child).collect(),
                None => Vec::new(),
            };
            generation
                .students
                .iter()
                .enumerate()
                .filter(move |(col, _)| !linked.contains(col))
                .map(move |(_, student)| descent(generations, row, student, family).to_string())
        })
        .collect()
}

fn header(generation: &Generation) -> String {
    match generation.promotion() {
        Some(promotion) if !promotion.is_empty() => {
            format!("{} · {}", generation.rank, promotion)
        }
        _ => generation.rank.to_string(),
    }
}

fn name_box(student: &Student, query: Option<&Student>) -> String {
    let text = format!("[ {} ]", student.name);
    if query == Some(student) {
        text.bold().reversed().to_string()
    } else {
        text
    }
}

fn connector_lines(generations: &Generations, row: usize) -> Vec<String> {
    let (Some(upper), Some(lower)) = (generations.get(row), generations.get(row + 1)) else {
        return Vec::new();
    };
    let by_parent = generations.links(row).into_iter().chunk_by(|link| link.parent);
    let lines: Vec<String> = by_parent
        .into_iter()
        .map(|(parent, links)| {
            let children = links
                .map(|link| lower.students[link.child].name.as_str())
                .join(", ");
            format!("{} ── {}", upper.students[parent].name, children)
        })
        .collect();
    lines
}

fn descent(generations: &Generations, row: usize, student: &Student, family: &Family) -> Tree<String> {
    let label = if family.query.as_ref() == Some(student) {
        student.name.bold().reversed().to_string()
    } else {
        student.name.clone()
    };
    let leaves: Vec<_> = generations
        .children_of(row, student)
        .map(|child| descent(generations, row + 1, child, family))
        .collect();

    Tree::new(format!("{} ({})", label, student.rank)).with_leaves(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{build_tree, Rank};

    fn family() -> Family {
        let students = vec![
            Student::new(1, "Alice", Rank::Alumni)
                .with_promotion("2015")
                .with_children([3]),
            Student::new(2, "Bob", Rank::Alumni).with_promotion("2015"),
            Student::new(3, "Dave", Rank::I3)
                .with_promotion("2018")
                .with_parents([1]),
            Student::new(4, "Erin", Rank::I3).with_promotion("2018"),
        ];
        let query = students[2].clone();
        Family {
            generations: build_tree(students),
            query: Some(query),
        }
    }

    #[test]
    fn given_family_when_rendering_rows_then_headers_and_links_present() {
        let out = render_rows(&family(), true);
        assert!(out.contains("Alumni · 2015"));
        assert!(out.contains("I3 · 2018"));
        assert!(out.contains("Alice ── Dave"));
        assert!(out.contains("Erin"));
    }

    #[test]
    fn given_links_disabled_when_rendering_rows_then_no_connectors() {
        let out = render_rows(&family(), false);
        assert!(!out.contains("──"));
    }

    #[test]
    fn given_orphan_when_rendering_tree_then_rendered_as_own_root() {
        let out = render_tree(&family());
        assert!(out.contains("Alice (Alumni)"));
        assert!(out.contains("Bob (Alumni)"));
        // Erin has no mentor in the row above
        assert!(out.lines().any(|l| l.starts_with("Erin")));
    }

    #[test]
    fn given_family_when_rendering_rows_then_one_line_per_part_in_order() {
        // Act
        let out = render_rows(&family(), true);

        // Assert
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Alumni · 2015"));
        assert!(lines[1].contains("[ Alice ]") && lines[1].contains("[ Bob ]"));
        assert!(lines[2].starts_with("    ") && lines[2].contains("Alice ── Dave"));
        assert!(lines[3].contains("I3 · 2018"));
        assert!(lines[4].contains("Dave") && lines[4].contains("[ Erin ]"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn given_family_when_rendering_tree_then_roots_follow_row_order() {
        // Act
        let out = render_tree(&family());

        // Assert
        let roots: Vec<&str> = out
            .lines()
            .filter(|l| !l.starts_with(['└', '├', '│', ' ']))
            .collect();
        assert_eq!(roots.len(), 3);
        assert!(roots[0].starts_with("Alice"));
        assert!(roots[1].starts_with("Bob"));
        assert!(roots[2].starts_with("Erin"));
        assert!(out.lines().any(|l| l.starts_with("└── ") && l.contains("Dave")));
    }

    #[test]
    fn given_empty_family_when_rendering_then_empty_output() {
        let family = Family::default();
        assert!(render_rows(&family, true).is_empty());
        assert!(render_tree(&family).is_empty());
    }
}

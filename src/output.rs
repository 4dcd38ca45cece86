use crate::model::Task;

pub fn format_task_detail(task: &Task) -> String {
    let mut out = String::new();
    out.push_str(&format!("Id:          {}\n", task.id));
    out.push_str(&format!("Title:       {}\n", task.title));
    out.push_str(&format!("Status:      {}\n", task.status_str()));
    if let Some(ref desc) = task.description {
        if !desc.is_empty() {
            out.push_str(&format!("Description: {}\n", desc));
        }
    }
    out
}

pub fn format_task_list(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        let desc = match task.description.as_deref() {
            Some(d) if !d.is_empty() => format!("  {d}"),
            _ => String::new(),
        };
        out.push_str(&format!(
            "{} {:>3} {}{}\n",
            task.icon(),
            task.id,
            task.title,
            desc
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: i64, title: &str, completed: bool, desc: Option<&str>) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: desc.map(|s| s.to_string()),
            completed,
        }
    }

    #[test]
    fn flat_list() {
        let tasks = vec![
            make_task(1, "a", false, Some("desc A")),
            make_task(2, "b", true, None),
        ];
        let out = format_task_list(&tasks);
        assert_eq!(out, ".   1 a  desc A\nx   2 b\n");
    }

    #[test]
    fn detail_skips_empty_description() {
        let out = format_task_detail(&make_task(3, "Buy milk", true, Some("")));
        assert!(out.contains("Title:       Buy milk\n"));
        assert!(out.contains("Status:      completed\n"));
        assert!(!out.contains("Description"));
    }
}

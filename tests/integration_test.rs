use filo::{AppShell, CloseDecision, ExitChoice, Prompter, PathStore};
use filo::{WorkspaceBinding, WorkspacePersistence, InteractionController, DragPayload, DropDecision};
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// Prompter that answers every question the same way.
#[derive(Default)]
struct FixedPrompter {
    save_target: Option<PathBuf>,
    workspace: Option<PathBuf>,
    confirm: bool,
    exit_choice: Option<ExitChoice>,
    save_prompts: usize,
    errors: Vec<String>,
}

impl Prompter for FixedPrompter {
    fn pick_files(&mut self) -> Vec<PathBuf> {
        Vec::new()
    }

    fn pick_folder(&mut self) -> Option<PathBuf> {
        None
    }

    fn pick_save_target(&mut self) -> Option<PathBuf> {
        self.save_prompts += 1;
        self.save_target.clone()
    }

    fn pick_workspace(&mut self) -> Option<PathBuf> {
        self.workspace.clone()
    }

    fn confirm(&mut self, _title: &str, _message: &str) -> bool {
        self.confirm
    }

    fn ask_save_before_exit(&mut self) -> ExitChoice {
        self.exit_choice.unwrap_or(ExitChoice::Cancel)
    }

    fn report_error(&mut self, _title: &str, message: &str) {
        self.errors.push(message.to_string());
    }

    fn report_info(&mut self, _title: &str, _message: &str) {}
}

#[test]
fn test_add_save_clear_load_cycle() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let ws = dir.path().join("ws.json");

    let mut store = PathStore::new();
    assert!(store.add("/tmp/a.txt"));
    assert!(store.add("/tmp/b.png"));
    assert!(!store.add("/tmp/a.txt"));
    assert_eq!(store.list(), vec!["/tmp/a.txt", "/tmp/b.png"]);

    let mut binding = WorkspaceBinding::new();
    WorkspacePersistence::save(&store, &mut binding, &ws)?;
    assert_eq!(fs::read_to_string(&ws)?, r#"["/tmp/a.txt","/tmp/b.png"]"#);

    store.remove_all();
    assert!(store.is_empty());

    let loaded = WorkspacePersistence::load(&mut store, &mut binding, &ws)?;
    assert_eq!(loaded, vec!["/tmp/a.txt", "/tmp/b.png"]);
    assert_eq!(store.list(), vec!["/tmp/a.txt", "/tmp/b.png"]);
    assert_eq!(binding.current(), Some(ws.as_path()));

    Ok(())
}

#[test]
fn test_close_with_save_prompts_for_target() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out.json");

    let mut shell = AppShell::new();
    shell.store_mut().add("/tmp/a.txt");
    shell.store_mut().add("/tmp/b.png");

    let mut prompter = FixedPrompter {
        save_target: Some(out.clone()),
        exit_choice: Some(ExitChoice::Save),
        ..Default::default()
    };

    assert_eq!(shell.on_close_request(&mut prompter), CloseDecision::Proceed);
    assert_eq!(prompter.save_prompts, 1);
    assert_eq!(fs::read_to_string(&out)?, r#"["/tmp/a.txt","/tmp/b.png"]"#);

    Ok(())
}

#[test]
fn test_close_with_bound_workspace_saves_without_prompt() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let ws = dir.path().join("bound.json");
    fs::write(&ws, r#"["/one"]"#)?;

    let mut shell = AppShell::new();
    let mut prompter = FixedPrompter {
        workspace: Some(ws.clone()),
        confirm: true,
        exit_choice: Some(ExitChoice::Save),
        ..Default::default()
    };

    assert!(shell.on_startup(&mut prompter)?);
    assert_eq!(shell.store().list(), vec!["/one"]);

    shell.store_mut().add("/two");
    assert_eq!(shell.on_close_request(&mut prompter), CloseDecision::Proceed);
    assert_eq!(prompter.save_prompts, 0);
    assert_eq!(fs::read_to_string(&ws)?, r#"["/one","/two"]"#);

    Ok(())
}

#[test]
fn test_loading_garbage_reports_parse_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let ws = dir.path().join("garbage.json");
    fs::write(&ws, r#"{"not": "a list"}"#)?;

    let mut shell = AppShell::new();
    shell.store_mut().add("/keep");
    let mut prompter = FixedPrompter {
        workspace: Some(ws),
        ..Default::default()
    };

    assert!(shell.load_workspace(&mut prompter).is_err());
    assert_eq!(prompter.errors.len(), 1);
    assert_eq!(shell.store().list(), vec!["/keep"]);
    assert!(!shell.binding().is_bound());

    Ok(())
}

#[test]
fn test_drop_then_clear_toggles_placeholder() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.png");

    let mut shell = AppShell::new();
    assert!(shell.placeholder_visible());

    let rejected = DragPayload::default();
    assert_eq!(
        InteractionController::handle_drop(shell.store_mut(), &rejected),
        DropDecision::Reject
    );
    assert!(shell.placeholder_visible());

    let payload = DragPayload::from_paths([&a, &b, &a]);
    assert_eq!(
        InteractionController::handle_drop(shell.store_mut(), &payload),
        DropDecision::Accept
    );
    assert_eq!(shell.store().len(), 2);
    assert!(!shell.placeholder_visible());

    let mut prompter = FixedPrompter {
        confirm: true,
        ..Default::default()
    };
    assert!(shell.clear_with_confirmation(&mut prompter));
    assert!(shell.placeholder_visible());

    Ok(())
}

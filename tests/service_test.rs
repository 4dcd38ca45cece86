use taskrepo::{db, Error, InMemoryTaskRepository, SqlTaskRepository, TaskCreate, TaskRepository, TaskService};

fn buy_milk_scenario<R: TaskRepository>(service: &mut TaskService<R>) {
    let created = service.create_task(TaskCreate::new("Buy milk")).unwrap();
    assert_eq!(created.id, 1);
    assert!(!created.completed);

    let err = service.create_task(TaskCreate::new("Buy milk")).unwrap_err();
    assert!(matches!(err, Error::DuplicateTitle(ref t) if t == "Buy milk"));
    assert!(err.is_client_error());

    let done = service.complete_task(1).unwrap();
    assert_eq!(done.id, 1);
    assert_eq!(done.title, "Buy milk");
    assert!(done.completed);

    assert!(matches!(service.complete_task(99), Err(Error::NotFound(99))));
    assert_eq!(service.get_tasks().unwrap(), vec![done]);
}

#[test]
fn scenario_in_memory() {
    let mut service = TaskService::new(InMemoryTaskRepository::new());
    buy_milk_scenario(&mut service);
}

#[test]
fn scenario_sqlite() {
    let conn = db::open_memory().unwrap();
    let mut service = TaskService::new(SqlTaskRepository::new(&conn));
    buy_milk_scenario(&mut service);
}

#[test]
fn round_trip_through_service() {
    let conn = db::open_memory().unwrap();
    let mut service = TaskService::new(SqlTaskRepository::new(&conn));
    let created = service
        .create_task(TaskCreate::new("A").with_description("d"))
        .unwrap();
    assert_eq!(service.get_task(created.id).unwrap(), Some(created));
}

#[test]
fn sqlite_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.db");
    let path = path.to_str().unwrap();

    {
        let conn = db::open(path).unwrap();
        db::init(&conn).unwrap();
        let mut service = TaskService::new(SqlTaskRepository::new(&conn));
        service.create_task(TaskCreate::new("first")).unwrap();
        let second = service.create_task(TaskCreate::new("second")).unwrap();
        service.complete_task(second.id).unwrap();
    }

    let conn = db::open(path).unwrap();
    db::init(&conn).unwrap();
    let mut service = TaskService::new(SqlTaskRepository::new(&conn));
    let tasks = service.get_tasks().unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(!tasks[0].completed);
    assert!(tasks[1].completed);

    // Uniqueness is checked against what is already on disk.
    assert!(service.create_task(TaskCreate::new("first")).is_err());
    let third = service.create_task(TaskCreate::new("third")).unwrap();
    assert_eq!(third.id, 3);
}

#[test]
fn backend_chosen_at_runtime() {
    let conn = db::open_memory().unwrap();
    let backends: Vec<Box<dyn TaskRepository + '_>> = vec![
        Box::new(InMemoryTaskRepository::new()),
        Box::new(SqlTaskRepository::new(&conn)),
    ];
    for repo in backends {
        let mut service = TaskService::new(repo);
        for title in ["a", "b", "c"] {
            service.create_task(TaskCreate::new(title)).unwrap();
        }
        let ids: Vec<i64> = service.get_tasks().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

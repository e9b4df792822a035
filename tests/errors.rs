use taskpool::{PoolError, Status, TaskHandle, TaskPool};

use std::thread;
use std::time::Duration;

#[test]
fn test_zero_threads_rejected() {
    let result = TaskPool::<u32>::with_threads(0);

    assert!(matches!(
        result,
        Err(PoolError::Configuration { requested: 0 })
    ));
}

#[test]
fn test_unknown_handle_is_out_of_range() {
    let pool: TaskPool<u32> = TaskPool::with_threads(1).unwrap();

    assert!(matches!(
        pool.status(TaskHandle::INVALID),
        Err(PoolError::OutOfRange { .. })
    ));
    assert!(matches!(
        pool.result(TaskHandle::INVALID),
        Err(PoolError::OutOfRange { .. })
    ));
    assert!(matches!(
        pool.wait(TaskHandle::INVALID),
        Err(PoolError::OutOfRange { .. })
    ));
    assert!(matches!(
        pool.dispose(TaskHandle::INVALID),
        Err(PoolError::OutOfRange { .. })
    ));
}

#[test]
fn test_handle_from_other_pool_is_out_of_range() {
    let busy = TaskPool::with_threads(1).unwrap();
    let idle: TaskPool<i32> = TaskPool::with_threads(1).unwrap();

    busy.submit(|| 4).unwrap();
    let handle = busy.submit(|| 5).unwrap();
    idle.submit(|| 6).unwrap();

    assert!(matches!(
        idle.status(handle),
        Err(PoolError::OutOfRange { .. })
    ));
}

#[test]
fn test_result_before_ready_is_not_ready() {
    let pool = TaskPool::with_threads(1).unwrap();

    let running = pool
        .submit(|| {
            thread::sleep(Duration::from_millis(300));
            1
        })
        .unwrap();
    let queued = pool.submit(|| 2).unwrap();

    thread::sleep(Duration::from_millis(50));

    assert!(matches!(
        pool.result(running),
        Err(PoolError::NotReady {
            status: Status::Running,
            ..
        })
    ));
    assert!(matches!(
        pool.result(queued),
        Err(PoolError::NotReady {
            status: Status::Queued,
            ..
        })
    ));

    pool.wait(queued).unwrap();
    assert_eq!(pool.result(running).unwrap(), 1);
    assert_eq!(pool.result(queued).unwrap(), 2);
}

#[test]
fn test_missing_job_returns_sentinel() {
    let pool: TaskPool<u32> = TaskPool::with_threads(1).unwrap();

    let handle = pool.submit_job(None).unwrap();

    assert_eq!(handle, TaskHandle::INVALID);
    assert_eq!(handle.as_i64(), -1);
    assert_eq!(pool.stats().submitted, 0);
    assert_eq!(pool.stats().spawned_workers, 0);
    assert!(matches!(
        pool.status(handle),
        Err(PoolError::OutOfRange { .. })
    ));

    let handle = pool.submit_job(Some(Box::new(|| 3))).unwrap();
    assert_eq!(handle.index(), Some(0));
    pool.wait(handle).unwrap();
    assert_eq!(pool.result(handle).unwrap(), 3);
}

#[test_log::test]
fn test_panicking_task_is_failed_and_worker_survives() {
    let pool = TaskPool::with_threads(1).unwrap();

    let broken = pool
        .submit(|| -> u32 { panic!("division by zero") })
        .unwrap();
    let healthy = pool.submit(|| 10).unwrap();

    assert_eq!(pool.wait(broken).unwrap(), Status::Failed);
    assert_eq!(pool.wait(healthy).unwrap(), Status::Ready);

    match pool.result(broken) {
        Err(PoolError::TaskFailed { handle, message }) => {
            assert_eq!(handle, broken);
            assert_eq!(message, "division by zero");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(pool.result(healthy).unwrap(), 10);
    assert_eq!(pool.stats().spawned_workers, 1);
}

#[test]
fn test_dispose_keeps_handle_valid() {
    let pool = TaskPool::with_threads(1).unwrap();

    let handle = pool.submit(|| vec![0u8; 1024]).unwrap();
    pool.wait(handle).unwrap();

    pool.dispose(handle).unwrap();

    assert_eq!(pool.status(handle).unwrap(), Status::Ready);
    assert!(matches!(
        pool.result(handle),
        Err(PoolError::Disposed { .. })
    ));

    let next = pool.submit(|| vec![1u8]).unwrap();
    assert_eq!(next.index(), Some(1));
}

#[test]
fn test_dispose_unfinished_task_is_not_ready() {
    let pool = TaskPool::with_threads(1).unwrap();

    let handle = pool
        .submit(|| thread::sleep(Duration::from_millis(200)))
        .unwrap();

    assert!(matches!(
        pool.dispose(handle),
        Err(PoolError::NotReady { .. })
    ));

    pool.wait(handle).unwrap();
    pool.dispose(handle).unwrap();
}

use std::cell::{Cell, RefCell};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use serde_json::json;

use super::*;
use crate::error::{HookError, Result};
use crate::hooks::*;
use crate::runtime::HostContext;
use crate::store::{ReducerStore, Store};
use crate::value::Value;

type Wrapper = Rc<HookComponent<String>>;
type Slot<T> = Rc<RefCell<Option<T>>>;

fn counter() -> Rc<Cell<u32>> {
    Rc::new(Cell::new(0))
}

fn bump(count: &Cell<u32>) {
    count.set(count.get() + 1);
}

fn slot<T>() -> Slot<T> {
    Rc::new(RefCell::new(None))
}

fn setter(slot: &Slot<StateSetter>) -> StateSetter {
    slot.borrow().clone().expect("setter captured during render")
}

fn increment(setter: &StateSetter) {
    setter.update(|count| Value::from(count.as_int().unwrap_or(0) + 1));
}

/// Keep a child wrapper in a disposable slot: it is created when `deps`
/// changes and unmounted when the slot is disposed.
fn use_child(child: &Component<String>, host: &HostContext, deps: impl Into<Value>) -> Result<Wrapper> {
    let mounted = use_disposable(
        || {
            let wrapper = child.instantiate(host);
            let teardown = Rc::clone(&wrapper);
            Disposable::new(Value::opaque(wrapper), move || teardown.unmount())
        },
        deps,
    )?;
    mounted
        .downcast_ref::<Wrapper>()
        .cloned()
        .ok_or_else(|| HookError::render("child slot holds something else"))
}

/// Store whose reducer replaces the whole state with the action.
fn replacing_store(initial: serde_json::Value) -> Rc<ReducerStore> {
    Rc::new(ReducerStore::new(|_state, action| action.clone(), Value::from(initial)))
}

#[test]
fn renders_using_state() {
    let hello = component(|props: &Value, _: &HostContext| {
        let (count, _) = use_state(42)?;
        Ok(format!("Hi {} {}", props.get("name").cloned().unwrap_or_default(), count))
    });

    let mounted = hello.instantiate(&HostContext::new());
    assert_eq!(mounted.mount(json!({ "name": "George" })).unwrap(), "Hi George 42");
    assert!(mounted.is_mounted());
}

#[test]
fn multiple_use_states_are_allowed() {
    let host = HostContext::new();
    let count_setter = slot();
    let name_setter = slot();

    let hello = {
        let count_setter = Rc::clone(&count_setter);
        let name_setter = Rc::clone(&name_setter);
        component(move |props: &Value, _: &HostContext| {
            let (count, set_count) = use_state(42)?;
            let (last_name, set_last_name) = use_state("Cat")?;
            *count_setter.borrow_mut() = Some(set_count);
            *name_setter.borrow_mut() = Some(set_last_name);
            Ok(format!(
                "Hi {} {} {}",
                props.get("name").cloned().unwrap_or_default(),
                last_name,
                count
            ))
        })
    };

    let mounted = hello.instantiate(&host);
    mounted.mount(json!({ "name": "George" })).unwrap();

    increment(&setter(&count_setter));
    host.flush().unwrap();
    assert_eq!(mounted.output().unwrap(), "Hi George Cat 43");

    let set_last_name = setter(&name_setter);
    set_last_name.update(|name| Value::from(format!("{name}t")));
    host.flush().unwrap();
    assert_eq!(mounted.output().unwrap(), "Hi George Catt 43");
}

#[test]
fn state_initializers() {
    let hello = component(|_: &Value, _: &HostContext| {
        let (lazy, _) = use_state_with(|| "lazy")?;
        let (from_props, _) = use_state_from_props(|props| props.get("start").cloned())?;
        Ok(format!("{lazy} {from_props}"))
    });

    let mounted = hello.instantiate(&HostContext::new());
    assert_eq!(mounted.mount(json!({ "start": 7 })).unwrap(), "lazy 7");

    // Initializers only run on the first pass.
    assert_eq!(mounted.update(json!({ "start": 9 })).unwrap().unwrap(), "lazy 7");
}

#[test]
fn setting_an_identical_value_does_not_schedule() {
    let host = HostContext::new();
    let renders = counter();
    let captured = slot();

    let hello = {
        let renders = Rc::clone(&renders);
        let captured = Rc::clone(&captured);
        component(move |_: &Value, _: &HostContext| {
            bump(&renders);
            let (count, set_count) = use_state(5)?;
            *captured.borrow_mut() = Some(set_count);
            Ok(count.to_string())
        })
    };

    let mounted = hello.instantiate(&host);
    mounted.mount(()).unwrap();

    let set_count = setter(&captured);
    set_count.set(5);
    assert!(host.scheduler().is_idle());
    assert_eq!(host.flush().unwrap(), 0);
    assert_eq!(renders.get(), 1);

    set_count.set(6);
    assert_eq!(host.scheduler().pending(), 1);
    assert_eq!(host.flush().unwrap(), 1);
    assert_eq!(renders.get(), 2);
    assert_eq!(mounted.output().unwrap(), "6");
}

#[test]
fn effects_only_run_once() {
    let host = HostContext::new();
    let effects = counter();
    let captured = slot();

    let hello = {
        let effects = Rc::clone(&effects);
        let captured = Rc::clone(&captured);
        component(move |_: &Value, _: &HostContext| {
            let (count, set_count) = use_state(0)?;
            *captured.borrow_mut() = Some(set_count);
            use_effect(
                || {
                    bump(&effects);
                    None::<fn()>
                },
                (),
            )?;
            Ok(format!("Count is {count}"))
        })
    };

    let mounted = hello.instantiate(&host);
    mounted.mount(()).unwrap();

    increment(&setter(&captured));
    host.flush().unwrap();

    assert_eq!(effects.get(), 1);
    assert_eq!(mounted.output().unwrap(), "Count is 1");
}

#[test]
fn effect_cleanup_runs_before_the_next_setup() {
    let host = HostContext::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let captured = slot();

    let hello = {
        let log = Rc::clone(&log);
        let captured = Rc::clone(&captured);
        component(move |_: &Value, _: &HostContext| {
            let (count, set_count) = use_state(0)?;
            *captured.borrow_mut() = Some(set_count);
            let n = count.as_int().unwrap_or(0);
            let log = Rc::clone(&log);
            use_effect(
                move || {
                    log.borrow_mut().push(format!("setup {n}"));
                    Some(move || log.borrow_mut().push(format!("cleanup {n}")))
                },
                Value::list([n]),
            )?;
            Ok(String::new())
        })
    };

    let mounted = hello.instantiate(&host);
    mounted.mount(()).unwrap();
    increment(&setter(&captured));
    host.flush().unwrap();
    mounted.unmount();

    assert_eq!(
        *log.borrow(),
        vec!["setup 0", "cleanup 0", "setup 1", "cleanup 1"]
    );
}

#[test]
fn effects_are_disposed_when_unmounted() {
    let host = HostContext::new();
    let effects = counter();
    let disposed = counter();
    let captured = slot();

    let child = {
        let effects = Rc::clone(&effects);
        let disposed = Rc::clone(&disposed);
        component(move |_: &Value, _: &HostContext| {
            let disposed = Rc::clone(&disposed);
            use_effect(
                || {
                    bump(&effects);
                    Some(move || bump(&disposed))
                },
                (),
            )?;
            Ok(String::from("Child"))
        })
    };

    let hello = {
        let captured = Rc::clone(&captured);
        component(move |_: &Value, host: &HostContext| {
            let (count, set_count) = use_state(0)?;
            *captured.borrow_mut() = Some(set_count);
            let show = count.as_int().unwrap_or(0) < 2;
            let child = use_child(&child, host, show)?;
            let child_output = if show { child.mount(())? } else { String::new() };
            Ok(format!("Count is {count}{child_output}"))
        })
    };

    let mounted = hello.instantiate(&host);
    assert_eq!(mounted.mount(()).unwrap(), "Count is 0Child");

    increment(&setter(&captured));
    host.flush().unwrap();
    assert_eq!(effects.get(), 1);
    assert_eq!(disposed.get(), 0);

    increment(&setter(&captured));
    host.flush().unwrap();
    assert_eq!(disposed.get(), 1);
    assert_eq!(mounted.output().unwrap(), "Count is 2");
}

#[test]
fn use_disposable_is_disposed_of() {
    let host = HostContext::new();
    let factory_calls = counter();
    let disposed = counter();
    let captured = slot();

    let hello = {
        let factory_calls = Rc::clone(&factory_calls);
        let disposed = Rc::clone(&disposed);
        let captured = Rc::clone(&captured);
        component(move |_: &Value, _: &HostContext| {
            let (count, set_count) = use_state(0)?;
            *captured.borrow_mut() = Some(set_count);
            let disposed = Rc::clone(&disposed);
            let name = use_disposable(
                || {
                    bump(&factory_calls);
                    Disposable::new("World", move || bump(&disposed))
                },
                count.as_int().unwrap_or(0) < 2,
            )?;
            Ok(format!("Hello, {name}"))
        })
    };

    let mounted = hello.instantiate(&host);
    assert_eq!(mounted.mount(()).unwrap(), "Hello, World");

    increment(&setter(&captured));
    host.flush().unwrap();
    assert_eq!(factory_calls.get(), 1);
    assert_eq!(disposed.get(), 0);

    increment(&setter(&captured));
    host.flush().unwrap();
    assert_eq!(disposed.get(), 1);
    assert_eq!(factory_calls.get(), 2);
}

#[test]
fn use_memo_only_recomputes_when_its_watch_list_changes() {
    let host = HostContext::new();
    let computed = counter();
    let captured = slot();

    let hello = {
        let computed = Rc::clone(&computed);
        let captured = Rc::clone(&captured);
        component(move |_: &Value, _: &HostContext| {
            let (count, set_count) = use_state(0)?;
            *captured.borrow_mut() = Some(set_count);
            let n = count.as_int().unwrap_or(0);
            let label = use_memo(
                || {
                    bump(&computed);
                    format!("Count is {n}")
                },
                Value::list([n / 2]),
            )?;
            Ok(label.to_string())
        })
    };

    let mounted = hello.instantiate(&host);
    assert_eq!(mounted.mount(()).unwrap(), "Count is 0");

    increment(&setter(&captured));
    host.flush().unwrap();
    assert_eq!(mounted.output().unwrap(), "Count is 0");

    increment(&setter(&captured));
    host.flush().unwrap();
    assert_eq!(mounted.output().unwrap(), "Count is 2");
    assert_eq!(computed.get(), 2);
}

#[test]
fn use_dispatch_dispatches_to_the_contextual_store() {
    let actions = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&actions);
    let store = Rc::new(ReducerStore::new(
        move |state, action| {
            recorded.borrow_mut().push(action.clone());
            state.clone()
        },
        Value::Null,
    ));
    let host = HostContext::new().with_store(store);
    let captured = slot();

    let hello = {
        let captured = Rc::clone(&captured);
        component(move |_: &Value, _: &HostContext| {
            *captured.borrow_mut() = Some(use_dispatch()?);
            Ok(String::from("Click me!"))
        })
    };

    hello.instantiate(&host).mount(()).unwrap();
    assert!(actions.borrow().is_empty());

    let dispatch = captured.borrow().clone().unwrap();
    dispatch.call("iwasclicked");
    assert_eq!(*actions.borrow(), vec![Value::from("iwasclicked")]);
}

#[test]
fn store_hooks_require_a_store() {
    let selector = component(|_: &Value, _: &HostContext| {
        use_selector(|state| state.clone())?;
        Ok(String::new())
    });
    let dispatcher = component(|_: &Value, _: &HostContext| {
        use_dispatch()?;
        Ok(String::new())
    });

    let host = HostContext::new();
    assert_eq!(selector.instantiate(&host).mount(()), Err(HookError::MissingStore));
    assert_eq!(dispatcher.instantiate(&host).mount(()), Err(HookError::MissingStore));
}

#[test]
fn use_selector_redraws_when_the_value_changes() {
    let store = replacing_store(json!({ "name": "George" }));
    let host = HostContext::new().with_store(store.clone());

    let hello = component(|_: &Value, _: &HostContext| {
        let name = use_selector(|state| state.get("name").cloned())?;
        Ok(name.to_string())
    });

    let mounted = hello.instantiate(&host);
    assert_eq!(mounted.mount(()).unwrap(), "George");
    assert_eq!(store.listener_count(), 1);

    store.dispatch(Value::from(json!({ "name": "George Orwell" })));
    host.flush().unwrap();
    assert_eq!(mounted.output().unwrap(), "George Orwell");

    // Re-rendering does not subscribe again.
    assert_eq!(store.listener_count(), 1);
}

#[test]
fn components_unsubscribe_when_disposed() {
    let store = replacing_store(json!({ "name": "George" }));
    let host = HostContext::new().with_store(store.clone());
    let captured = slot();

    let hello = component(|_: &Value, _: &HostContext| {
        let name = use_selector(|state| state.get("name").cloned())?;
        Ok(name.to_string())
    });

    let show_hello = {
        let captured = Rc::clone(&captured);
        component(move |_: &Value, host: &HostContext| {
            let (show, set_show) = use_state(true)?;
            *captured.borrow_mut() = Some(set_show);
            let visible = show.as_bool().unwrap_or(false);
            let child = use_child(&hello, host, visible)?;
            let child_output = if visible { child.mount(())? } else { String::new() };
            Ok(format!("[{child_output}]"))
        })
    };

    let mounted = show_hello.instantiate(&host);
    assert_eq!(mounted.mount(()).unwrap(), "[George]");
    assert_eq!(store.listener_count(), 1);

    setter(&captured).set(false);
    host.flush().unwrap();
    assert_eq!(store.listener_count(), 0);
    assert_eq!(mounted.output().unwrap(), "[]");
}

#[test]
fn render_cache_and_use_selector_work_together() {
    let store = replacing_store(json!({ "name": "George", "age": 100 }));
    let host = HostContext::new().with_store(store.clone());
    let age_renders = counter();
    let name_renders = counter();
    let age_wrapper: Slot<Wrapper> = slot();

    let age = {
        let age_renders = Rc::clone(&age_renders);
        component(move |_: &Value, _: &HostContext| {
            let cache = use_render_cache()?;
            let age = use_selector(|state| state.get("age").cloned())?;
            if cache.is_cached() {
                return Ok(String::new());
            }
            bump(&age_renders);
            Ok(age.to_string())
        })
    };

    let name = {
        let name_renders = Rc::clone(&name_renders);
        let age_wrapper = Rc::clone(&age_wrapper);
        component(move |_: &Value, host: &HostContext| {
            let cache = use_render_cache()?;
            let name = use_selector(|state| state.get("name").cloned())?;
            let child = use_child(&age, host, ())?;
            *age_wrapper.borrow_mut() = Some(Rc::clone(&child));
            if cache.is_cached() {
                return Ok(String::new());
            }
            bump(&name_renders);
            Ok(format!("{name}|{}", child.mount(())?))
        })
    };

    let mounted = name.instantiate(&host);
    assert_eq!(mounted.mount(()).unwrap(), "George|100");
    assert_eq!(age_renders.get(), 1);
    assert_eq!(name_renders.get(), 1);
    let age_wrapper = age_wrapper.borrow().clone().unwrap();

    store.dispatch(Value::from(json!({ "name": "George Orwell", "age": 100 })));
    host.flush().unwrap();
    assert_eq!(mounted.output().unwrap(), "George Orwell|100");
    assert_eq!(age_wrapper.output().unwrap(), "100");
    assert_eq!(age_renders.get(), 1);
    assert_eq!(name_renders.get(), 2);

    store.dispatch(Value::from(json!({ "name": "George Orwell", "age": 128 })));
    host.flush().unwrap();
    assert_eq!(age_wrapper.output().unwrap(), "128");
    assert_eq!(age_renders.get(), 2);
    assert_eq!(name_renders.get(), 2);
}

#[test]
fn pure_component_skips_identical_props_but_still_runs_hooks() {
    let runs = counter();
    let label = {
        let runs = Rc::clone(&runs);
        component(move |props: &Value, _: &HostContext| {
            let cache = use_render_cache()?;
            bump(&runs);
            if cache.is_cached() {
                return Ok(String::from("<cached>"));
            }
            Ok(format!("label={}", props.get("label").cloned().unwrap_or_default()))
        })
    };

    let mounted = label.instantiate(&HostContext::new());
    assert_eq!(mounted.mount(json!({ "label": "a" })).unwrap(), "label=a");
    assert!(mounted.is_pure());
    assert_eq!(runs.get(), 1);

    assert!(!mounted.should_update(json!({ "label": "a" })).unwrap());
    assert_eq!(runs.get(), 2);
    assert_eq!(mounted.output().unwrap(), "label=a");

    assert!(mounted.should_update(json!({ "label": "b" })).unwrap());
    assert_eq!(runs.get(), 3);
    // The pass from `should_update` is reused.
    assert_eq!(mounted.render().unwrap(), "label=b");
    assert_eq!(runs.get(), 3);

    assert_eq!(mounted.update(json!({ "label": "b" })).unwrap(), None);
}

#[test]
fn failed_purity_check_keeps_previous_props() {
    let fail_next = Rc::new(Cell::new(false));
    let label = {
        let fail_next = Rc::clone(&fail_next);
        component(move |props: &Value, _: &HostContext| {
            let cache = use_render_cache()?;
            if fail_next.replace(false) {
                return Err(HookError::render("flaky"));
            }
            if cache.is_cached() {
                return Ok(String::new());
            }
            Ok(format!("label={}", props.get("label").cloned().unwrap_or_default()))
        })
    };

    let mounted = label.instantiate(&HostContext::new());
    mounted.mount(json!({ "label": "a" })).unwrap();

    fail_next.set(true);
    assert_eq!(
        mounted.should_update(json!({ "label": "b" })),
        Err(HookError::render("flaky"))
    );
    assert_eq!(mounted.props(), Value::from(json!({ "label": "a" })));
    assert_eq!(mounted.output().unwrap(), "label=a");

    // Retrying with the same props still sees them as new.
    assert!(mounted.should_update(json!({ "label": "b" })).unwrap());
    assert_eq!(mounted.render().unwrap(), "label=b");
}

#[test]
fn impure_component_always_updates_and_renders_lazily() {
    let runs = counter();
    let plain = {
        let runs = Rc::clone(&runs);
        component(move |_: &Value, _: &HostContext| {
            bump(&runs);
            Ok(String::from("plain"))
        })
    };

    let mounted = plain.instantiate(&HostContext::new());
    mounted.mount(()).unwrap();
    assert!(mounted.should_update(()).unwrap());
    assert_eq!(runs.get(), 1);
    mounted.render().unwrap();
    assert_eq!(runs.get(), 2);
}

#[test]
fn hooks_fail_outside_a_render() {
    assert_eq!(use_state(0).err(), Some(HookError::NoActiveContext));
    assert_eq!(use_memo(|| 1, ()).err(), Some(HookError::NoActiveContext));
    assert_eq!(
        use_effect(|| None::<fn()>, ()).err(),
        Some(HookError::NoActiveContext)
    );
    assert_eq!(
        use_disposable(|| Disposable::new(1, || {}), ()).err(),
        Some(HookError::NoActiveContext)
    );
    assert_eq!(use_selector(|s| s.clone()).err(), Some(HookError::NoActiveContext));
    assert!(matches!(use_dispatch(), Err(HookError::NoActiveContext)));
    assert!(matches!(use_render_cache(), Err(HookError::NoActiveContext)));
}

#[test]
fn failing_child_does_not_disturb_parent_slots() {
    let failing = component(|_: &Value, _: &HostContext| -> Result<String> {
        use_state(1)?;
        Err(HookError::render("child broke"))
    });

    let parent = component(move |_: &Value, host: &HostContext| {
        let (a, _) = use_state("a")?;
        let child = use_child(&failing, host, ())?;
        let child_failed = child.mount(()).is_err();
        let (b, _) = use_state("b")?;
        Ok(format!("{a}{b}:{child_failed}"))
    });

    let mounted = parent.instantiate(&HostContext::new());
    assert_eq!(mounted.mount(()).unwrap(), "ab:true");
    assert_eq!(mounted.update(()).unwrap().unwrap(), "ab:true");
    assert_eq!(mounted.instance().slot_count(), 3);
}

#[test]
fn unmount_disposes_slots_in_creation_order() {
    let order = Rc::new(RefCell::new(Vec::new()));

    let hello = {
        let order = Rc::clone(&order);
        component(move |_: &Value, _: &HostContext| {
            let first = Rc::clone(&order);
            use_effect(|| Some(move || first.borrow_mut().push(0)), ())?;
            let second = Rc::clone(&order);
            use_disposable(|| Disposable::new(1, move || second.borrow_mut().push(1)), ())?;
            let third = Rc::clone(&order);
            use_effect(|| Some(move || third.borrow_mut().push(2)), ())?;
            Ok(String::new())
        })
    };

    let mounted = hello.instantiate(&HostContext::new());
    mounted.mount(()).unwrap();
    mounted.update(()).unwrap();
    assert!(order.borrow().is_empty());

    mounted.unmount();
    mounted.unmount();
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn panicking_disposer_stops_the_teardown() {
    let later = Rc::new(RefCell::new(Vec::new()));

    let hello = {
        let later = Rc::clone(&later);
        component(move |_: &Value, _: &HostContext| {
            use_effect(
                || {
                    Some(|| {
                        panic!("disposer failed");
                    })
                },
                (),
            )?;
            let later = Rc::clone(&later);
            use_effect(|| Some(move || later.borrow_mut().push("second")), ())?;
            Ok(String::new())
        })
    };

    let mounted = hello.instantiate(&HostContext::new());
    mounted.mount(()).unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| mounted.unmount()));
    assert!(result.is_err());
    assert!(later.borrow().is_empty());
    assert!(mounted.is_disposed());

    mounted.unmount();
    assert!(later.borrow().is_empty());
}

#[test]
fn unmounted_wrapper_rejects_host_calls() {
    let host = HostContext::new();
    let captured = slot();
    let hello = {
        let captured = Rc::clone(&captured);
        component(move |_: &Value, _: &HostContext| {
            let (count, set_count) = use_state(0)?;
            *captured.borrow_mut() = Some(set_count);
            Ok(count.to_string())
        })
    };

    let mounted = hello.instantiate(&host);
    mounted.mount(()).unwrap();
    let id = mounted.id();
    mounted.unmount();

    assert!(mounted.is_disposed());
    assert_eq!(mounted.render(), Err(HookError::Unmounted(id)));
    assert_eq!(mounted.should_update(()), Err(HookError::Unmounted(id)));
    assert_eq!(mounted.mount(()), Err(HookError::Unmounted(id)));

    increment(&setter(&captured));
    assert!(host.scheduler().is_idle());
}

#[test]
fn replacing_the_render_function_resets_identity() {
    let store = replacing_store(json!({ "n": 1 }));
    let host = HostContext::new().with_store(store.clone());
    let disposed = counter();
    let captured = slot();

    let first = {
        let disposed = Rc::clone(&disposed);
        let captured = Rc::clone(&captured);
        component(move |_: &Value, _: &HostContext| {
            let (count, set_count) = use_state(0)?;
            *captured.borrow_mut() = Some(set_count);
            let n = use_selector(|state| state.get("n").cloned())?;
            let disposed = Rc::clone(&disposed);
            use_effect(|| Some(move || bump(&disposed)), ())?;
            Ok(format!("first {count} {n}"))
        })
    };
    let second = component(|_: &Value, _: &HostContext| {
        let (count, _) = use_state(100)?;
        Ok(format!("second {count}"))
    });

    let mounted = first.instantiate(&host);
    mounted.mount(()).unwrap();
    let old_id = mounted.id();
    increment(&setter(&captured));
    host.flush().unwrap();
    assert_eq!(mounted.output().unwrap(), "first 1 1");

    mounted.replace_component(&first.clone()).unwrap();
    assert_eq!(mounted.id(), old_id);
    assert_eq!(disposed.get(), 0);

    mounted.replace_component(&second).unwrap();
    assert_ne!(mounted.id(), old_id);
    assert_eq!(disposed.get(), 1);
    assert_eq!(store.listener_count(), 0);
    assert!(mounted.output().is_none());
    assert!(!mounted.is_mounted());

    assert_eq!(mounted.render().unwrap(), "second 100");

    // The old instance's setter no longer reaches the wrapper.
    increment(&setter(&captured));
    assert!(host.scheduler().is_idle());
}

#[test]
fn remounting_is_an_update() {
    let runs = counter();
    let hello = {
        let runs = Rc::clone(&runs);
        component(move |props: &Value, _: &HostContext| {
            let cache = use_render_cache()?;
            bump(&runs);
            if cache.is_cached() {
                return Ok(String::new());
            }
            Ok(props.to_string())
        })
    };

    let mounted = hello.instantiate(&HostContext::new());
    assert_eq!(mounted.mount("x").unwrap(), "x");
    assert_eq!(mounted.mount("x").unwrap(), "x");
    assert_eq!(runs.get(), 2);
    assert_eq!(mounted.mount("y").unwrap(), "y");
}

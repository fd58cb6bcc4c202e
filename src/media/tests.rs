use super::listeners::ListenerRegistry;
use super::*;

#[test]
fn registry_fans_out_to_matching_listeners_only() {
    let mut reg = ListenerRegistry::default();
    let a = reg.add(MediaEventKind::Ended);
    let _b = reg.add(MediaEventKind::TimeUpdate);
    let c = reg.add(MediaEventKind::Ended);

    let ended: Vec<ListenerId> = reg.emit(MediaEventKind::Ended).map(|e| e.listener).collect();
    assert_eq!(ended, vec![a, c]);
    assert_eq!(reg.emit(MediaEventKind::LoadedData).count(), 0);
}

#[test]
fn registry_remove_reports_unknown_ids_and_never_reuses() {
    let mut reg = ListenerRegistry::default();
    let a = reg.add(MediaEventKind::Ended);
    assert!(reg.remove(a));
    assert!(!reg.remove(a));
    assert_eq!(reg.len(), 0);

    let b = reg.add(MediaEventKind::Ended);
    assert_ne!(a, b);
}

#[test]
fn fake_media_only_delivers_to_registered_listeners() {
    let mut media = fake::FakeMedia::new();
    let id = media.add_listener(MediaEventKind::TimeUpdate);
    media.advance_to(3.0);
    media.remove_listener(id);
    media.advance_to(4.0);

    let events = media.drain_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].listener, id);
    assert!(media.drain_events().is_empty());
}

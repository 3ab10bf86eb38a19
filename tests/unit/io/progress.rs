//! Tests for stage progress reporting

#[cfg(test)]
mod tests {
    use pixmaze::io::progress::StageProgress;

    #[test]
    fn test_update_tracks_position() {
        let progress = StageProgress::new(true);
        progress.begin("compose");
        progress.update(3, 10);
        assert_eq!(progress.position(), 3);
        progress.update(10, 10);
        assert_eq!(progress.position(), 10);
    }

    #[test]
    fn test_begin_resets_stage() {
        let progress = StageProgress::new(true);
        progress.begin("carve");
        progress.update(7, 9);
        progress.begin("compose");
        assert_eq!(progress.position(), 0);
    }

    #[test]
    fn test_complete_fills_stage() {
        let progress = StageProgress::new(true);
        progress.begin("carve");
        progress.update(2, 5);
        progress.complete("5 open cells".to_string());
        assert_eq!(progress.position(), 5);
        progress.finish();
    }
}

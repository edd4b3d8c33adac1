mod tests {
    use embassy_time::Duration;
    use interval_timer::{
        ChannelState, ChannelStatus, DisplayConfig, DisplayConfigError, DisplayRenderer, OFF, Rgb,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const DEACTIVATED: ChannelState = ChannelState::new();

    fn renderer() -> DisplayRenderer<3, 12> {
        DisplayRenderer::new(DisplayConfig::default()).unwrap()
    }

    fn running(ms: u64) -> ChannelState {
        ChannelState {
            status: ChannelStatus::Running,
            running_elapsed: Duration::from_millis(ms),
            finished_elapsed: Duration::from_millis(0),
        }
    }

    fn finished(ms: u64) -> ChannelState {
        ChannelState {
            status: ChannelStatus::Finished,
            running_elapsed: Duration::from_millis(24_100),
            finished_elapsed: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_deactivated_channels_are_all_off() {
        let mut renderer = renderer();
        let frame = renderer.render(&[DEACTIVATED; 3]);
        assert_eq!(frame, &[OFF; 12]);
    }

    #[test]
    fn test_running_status_cell_lit_on_even_second() {
        let mut renderer = renderer();
        let frame = renderer.render(&[running(0), DEACTIVATED, DEACTIVATED]);
        assert_eq!(frame[0], RED);
        assert_eq!(&frame[1..], &[OFF; 11]);
    }

    #[test]
    fn test_running_status_cell_dark_on_odd_second() {
        let mut renderer = renderer();
        let frame = renderer.render(&[running(1000), DEACTIVATED, DEACTIVATED]);
        assert_eq!(frame[0], OFF);
    }

    #[test]
    fn test_first_progress_cell_lights_after_one_third() {
        let mut renderer = renderer();
        // 8000 ms is exactly a third of the default duration: not yet lit.
        let frame = renderer.render(&[running(8000), DEACTIVATED, DEACTIVATED]);
        assert_eq!(frame[1], OFF);

        let frame = renderer.render(&[running(8100), DEACTIVATED, DEACTIVATED]);
        assert_eq!(frame[0], RED);
        assert_eq!(frame[1], GREEN);
        assert_eq!(frame[2], OFF);
        assert_eq!(frame[3], OFF);
    }

    #[test]
    fn test_second_progress_cell_lights_after_two_thirds() {
        let mut renderer = renderer();
        let frame = renderer.render(&[running(16_100), DEACTIVATED, DEACTIVATED]);
        assert_eq!(frame[1], GREEN);
        assert_eq!(frame[2], GREEN);
        // The last cell never lights while running.
        assert_eq!(frame[3], OFF);
    }

    #[test]
    fn test_finished_group_blinks_together() {
        let mut renderer = renderer();
        let frame = renderer.render(&[finished(0), DEACTIVATED, DEACTIVATED]);
        assert_eq!(&frame[..4], &[GREEN; 4]);

        let frame = renderer.render(&[finished(1000), DEACTIVATED, DEACTIVATED]);
        assert_eq!(&frame[..4], &[OFF; 4]);
    }

    #[test]
    fn test_finished_group_dark_after_animation_window() {
        let mut renderer = renderer();
        let frame = renderer.render(&[finished(20_000), DEACTIVATED, DEACTIVATED]);
        assert_eq!(frame, &[OFF; 12]);
    }

    #[test]
    fn test_channel_groups_are_disjoint() {
        let mut renderer = renderer();
        let frame = renderer.render(&[DEACTIVATED, running(0), finished(0)]);
        assert_eq!(&frame[..4], &[OFF; 4]);
        assert_eq!(frame[4], RED);
        assert_eq!(&frame[5..8], &[OFF; 3]);
        assert_eq!(&frame[8..], &[GREEN; 4]);
    }

    #[test]
    fn test_render_is_pure() {
        let mut renderer = renderer();
        let states = [running(8100), finished(500), DEACTIVATED];
        let first: [Rgb; 12] = renderer.render(&states).try_into().unwrap();
        let second: [Rgb; 12] = renderer.render(&states).try_into().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cell_count_must_match_channel_count() {
        assert_eq!(
            DisplayRenderer::<3, 10>::new(DisplayConfig::default()).err(),
            Some(DisplayConfigError::CellCountMismatch {
                expected: 12,
                actual: 10
            })
        );
    }

    #[test]
    fn test_zero_timer_duration_is_rejected() {
        let config = DisplayConfig {
            timer_duration: Duration::from_millis(0),
            ..DisplayConfig::default()
        };
        assert_eq!(
            DisplayRenderer::<3, 12>::new(config).err(),
            Some(DisplayConfigError::ZeroTimerDuration)
        );
    }
}

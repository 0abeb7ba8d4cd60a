/// Phone outline drawn over the preview image
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Color, Point, Rectangle, Size};

use crate::Message;

/// Width of the bezel stroke
const BEZEL_WIDTH: f32 = 6.0;
/// Corner radius of the phone body
const CORNER_RADIUS: f32 = 28.0;
/// Speaker pill dimensions
const PILL_SIZE: Size = Size::new(64.0, 4.0);
const PILL_TOP: f32 = 16.0;

/// Transparent canvas layer: rounded bezel plus the speaker pill
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneFrame;

impl canvas::Program<Message> for PhoneFrame {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();

        // Stroke is centered on the path, keep it inside the bounds
        let inset = BEZEL_WIDTH / 2.0;
        let body = Path::rounded_rectangle(
            Point::new(inset, inset),
            Size::new(bounds.width - BEZEL_WIDTH, bounds.height - BEZEL_WIDTH),
            CORNER_RADIUS.into(),
        );
        frame.stroke(
            &body,
            Stroke::default()
                .with_color(palette.background.strong.color)
                .with_width(BEZEL_WIDTH),
        );

        let pill = Path::rounded_rectangle(
            Point::new((bounds.width - PILL_SIZE.width) / 2.0, PILL_TOP),
            PILL_SIZE,
            (PILL_SIZE.height / 2.0).into(),
        );
        frame.fill(&pill, Color::from_rgba(0.12, 0.12, 0.12, 0.2));

        vec![frame.into_geometry()]
    }
}

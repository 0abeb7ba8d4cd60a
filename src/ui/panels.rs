//! The three cards of the designer: upload, model choice and preview.
//!
//! Every function here only reads state and emits `Message`s.

use iced::widget::{button, canvas, column, container, image, mouse_area, row, stack, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::PhoneFrame;
use crate::state::{ModelId, UploadState};
use crate::Message;

/// Preview keeps a 9:16 phone aspect
const PREVIEW_WIDTH: f32 = 270.0;
const PREVIEW_HEIGHT: f32 = 480.0;
const THUMBNAIL_HEIGHT: f32 = 192.0;
const MODEL_COLUMNS: usize = 2;

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// Drop zone when empty, thumbnail with change/reset buttons otherwise
pub fn upload_card<'a>(
    preview: Option<&'a image::Handle>,
    notice: Option<&'a str>,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match preview {
        None => {
            let zone = container(
                column![
                    text("+").size(48),
                    text("Click to upload an image"),
                    text("Supports JPG and PNG").size(12),
                ]
                .spacing(8)
                .align_x(Alignment::Center),
            )
            .padding(32)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(container::bordered_box);

            mouse_area(zone).on_press(Message::PickImage).into()
        }
        Some(handle) => column![
            image(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(THUMBNAIL_HEIGHT),
            row![
                button(text("Change image").align_x(Alignment::Center))
                    .on_press(Message::PickImage)
                    .width(Length::Fill),
                button("Reset")
                    .on_press(Message::Reset)
                    .style(button::secondary),
            ]
            .spacing(8),
        ]
        .spacing(16)
        .into(),
    };

    let mut content = column![body].spacing(12);
    if let Some(notice) = notice {
        content = content.push(text(notice).size(12).style(text::danger));
    }

    card(content)
}

/// Grid of catalog entries, selected one highlighted
pub fn model_card<'a>(selected: ModelId) -> Element<'a, Message> {
    let models: Vec<ModelId> = ModelId::all().collect();

    let grid = models.chunks(MODEL_COLUMNS).fold(column![].spacing(8), |grid, chunk| {
        let line = chunk.iter().fold(row![].spacing(8), |line, &model| {
            let style = if model == selected {
                button::primary
            } else {
                button::text
            };
            line.push(
                button(text(model.display_name()).size(14))
                    .on_press(Message::SelectModel(model))
                    .style(style)
                    .padding(12)
                    .width(Length::Fill),
            )
        });
        grid.push(line)
    });

    card(column![text("Choose model").size(18), grid].spacing(16))
}

/// Phone-shaped preview, caption and the (inert) design actions
pub fn preview_card<'a>(
    state: &'a UploadState,
    preview: Option<&'a image::Handle>,
) -> Element<'a, Message> {
    let screen: Element<'a, Message> = match preview {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(text("Upload an image to preview").size(14))
            .center(Length::Fill)
            .into(),
    };

    let phone = stack![
        container(screen)
            .width(PREVIEW_WIDTH)
            .height(PREVIEW_HEIGHT)
            .clip(true),
        canvas(PhoneFrame).width(PREVIEW_WIDTH).height(PREVIEW_HEIGHT),
    ];

    let mut content = column![
        text("Preview").size(18),
        container(phone).center_x(Length::Fill),
        container(text(state.selected_model.display_name()).size(14)).center_x(Length::Fill),
    ]
    .spacing(16);

    if state.image.is_some() {
        content = content.push(
            column![
                button(text("Download design").align_x(Alignment::Center))
                    .on_press(Message::Download)
                    .width(Length::Fill),
                button(text("Order now").align_x(Alignment::Center))
                    .on_press(Message::Order)
                    .style(button::secondary)
                    .width(Length::Fill),
            ]
            .spacing(12),
        );
    }

    card(content)
}

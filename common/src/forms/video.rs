use crate::forms::FormRecord;
use crate::model::video::VideoUploadPayload;

#[derive(Debug, Clone)]
pub enum VideoEdit<F> {
    Id(String),
    Batch(String),
    Video(Option<F>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoForm<F> {
    pub id: String,
    pub batch: String,
    pub video: Option<F>,
}

impl<F> Default for VideoForm<F> {
    fn default() -> Self {
        Self {
            id: String::new(),
            batch: String::new(),
            video: None,
        }
    }
}

impl<F: Clone> VideoForm<F> {
    pub fn apply(&mut self, edit: VideoEdit<F>) -> bool {
        match edit {
            VideoEdit::Id(value) => super::replace(&mut self.id, value),
            VideoEdit::Batch(value) => super::replace(&mut self.batch, value),
            VideoEdit::Video(video) => {
                self.video = video;
                true
            }
        }
    }

    pub fn payload(&self) -> VideoUploadPayload<F> {
        VideoUploadPayload {
            id: self.id.clone(),
            batch: self.batch.clone(),
            video: self.video.clone(),
        }
    }

}

impl<F> FormRecord for VideoForm<F> {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_takes_fields_and_chosen_video() {
        let mut form: VideoForm<&str> = VideoForm::default();
        form.apply(VideoEdit::Id("t1".into()));
        form.apply(VideoEdit::Batch("10e".into()));
        form.apply(VideoEdit::Video(Some("class.mp4")));

        assert_eq!(
            form.payload(),
            VideoUploadPayload {
                id: "t1".into(),
                batch: "10e".into(),
                video: Some("class.mp4"),
            }
        );
    }

    #[test]
    fn payload_without_a_video_keeps_it_absent() {
        let mut form: VideoForm<&str> = VideoForm::default();
        form.apply(VideoEdit::Video(Some("class.mp4")));
        form.apply(VideoEdit::Video(None));
        assert_eq!(form.payload().video, None);
    }
}

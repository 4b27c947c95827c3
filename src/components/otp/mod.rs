mod modal;

pub(crate) use modal::OtpModal;

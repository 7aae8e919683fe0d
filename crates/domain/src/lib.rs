mod booking;
mod country;
mod course;
mod member;
pub mod scheduling;
mod shared;
mod user;

pub use booking::{meeting_url, Booking, BookingNumber, BookingStatus};
pub use country::Country;
pub use course::{
    AvailabilitySlot, Course, CourseStatus, Enrollment, EnrollmentStatus, Teacher,
};
pub use member::FamilyMember;
pub use shared::checksum::{append_check_digit, check_digit};
pub use shared::entity::{Entity, ID};
pub use user::{generate_user_no, User, UserProfile, UserStatus};

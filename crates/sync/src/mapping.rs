//! Translation between storage rows (snake_case) and in-memory entities.

use mucize_core::entities::{
    Appointment, ContactMessage, NewAppointment, NewMessage, Review, ReviewSubmission,
    ServiceInput, ServiceItem,
};
use mucize_core::error::CoreError;
use mucize_core::icon::ServiceIcon;
use mucize_db::models::appointment::{AppointmentRow, NewAppointmentRow};
use mucize_db::models::message::{MessageRow, NewMessageRow};
use mucize_db::models::review::{NewReviewRow, ReviewRow};
use mucize_db::models::service::{NewServiceRow, ServiceRow};

pub fn service_from_row(row: ServiceRow) -> ServiceItem {
    ServiceItem {
        id: row.id,
        title: row.title,
        description: row.description,
        icon: ServiceIcon::from_name_or_default(&row.icon),
        image: row.image,
        base_price: row.base_price,
    }
}

pub fn service_to_row(input: &ServiceInput) -> NewServiceRow {
    NewServiceRow {
        title: input.title.clone(),
        description: input.description.clone(),
        icon: input.icon.as_str().to_string(),
        image: input.image.clone(),
        base_price: input.base_price,
    }
}

/// Fails only when the stored status is outside the known set.
pub fn appointment_from_row(row: AppointmentRow) -> Result<Appointment, CoreError> {
    Ok(Appointment {
        status: row.status.parse()?,
        id: row.id,
        customer_name: row.customer_name,
        customer_phone: row.customer_phone,
        service_id: row.service_id,
        service_name: row.service_name,
        date: row.date,
        time_slot: row.time_slot,
        address: row.address,
        notes: row.notes,
        price_estimate: row.price_estimate,
        created_at: row.created_at,
    })
}

pub fn appointment_to_row(input: &NewAppointment) -> NewAppointmentRow {
    NewAppointmentRow {
        customer_name: input.customer_name.clone(),
        customer_phone: input.customer_phone.clone(),
        service_id: input.service_id,
        service_name: input.service_name.clone(),
        date: input.date.clone(),
        time_slot: input.time_slot.clone(),
        address: input.address.clone(),
        status: input.status.as_str().to_string(),
        notes: input.notes.clone(),
        price_estimate: input.price_estimate,
    }
}

pub fn message_from_row(row: MessageRow) -> ContactMessage {
    ContactMessage {
        id: row.id,
        name: row.name,
        email: row.email,
        phone: row.phone,
        message: row.message,
        created_at: row.created_at,
    }
}

pub fn message_to_row(input: &NewMessage) -> NewMessageRow {
    NewMessageRow {
        name: input.name.clone(),
        email: input.email.clone(),
        phone: input.phone.clone(),
        message: input.message.clone(),
    }
}

pub fn review_from_row(row: ReviewRow) -> Review {
    Review {
        id: row.id,
        service_id: row.service_id,
        customer_name: row.customer_name,
        rating: row.rating,
        comment: row.comment,
        created_at: row.created_at,
    }
}

/// The submitter's phone is not persisted.
pub fn review_to_row(input: &ReviewSubmission) -> NewReviewRow {
    NewReviewRow {
        service_id: input.service_id,
        customer_name: input.customer_name.clone(),
        rating: input.rating,
        comment: input.comment.clone(),
    }
}

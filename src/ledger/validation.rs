//! Input validation for ledger operations.
//!
//! Column limits mirror the widths the record store was designed with.

use crate::db::{
    ClientParkingRequest, CreateClientRequest, CreateParkingRequest, NewClient, NewParking,
};

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const MISSING_SESSION_IDS: &str = "Missing client_id or parking_id";

const MAX_NAME_LEN: usize = 50;
const MAX_CREDIT_CARD_LEN: usize = 50;
const MAX_CAR_NUMBER_LEN: usize = 10;
const MAX_ADDRESS_LEN: usize = 100;

/// Treat absent, empty and whitespace-only strings alike
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn validate_length(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{} is too long (max {} characters)", field, max));
    }
    Ok(())
}

pub fn validate_new_client(req: &CreateClientRequest) -> Result<NewClient, String> {
    let (Some(name), Some(surname)) = (present(req.name.as_deref()), present(req.surname.as_deref()))
    else {
        return Err(MISSING_REQUIRED_FIELDS.to_string());
    };

    let credit_card = present(req.credit_card.as_deref());
    let car_number = present(req.car_number.as_deref());

    validate_length("name", name, MAX_NAME_LEN)?;
    validate_length("surname", surname, MAX_NAME_LEN)?;
    if let Some(card) = credit_card {
        validate_length("credit_card", card, MAX_CREDIT_CARD_LEN)?;
    }
    if let Some(number) = car_number {
        validate_length("car_number", number, MAX_CAR_NUMBER_LEN)?;
    }

    Ok(NewClient {
        name: name.to_string(),
        surname: surname.to_string(),
        credit_card: credit_card.map(str::to_string),
        car_number: car_number.map(str::to_string),
    })
}

pub fn validate_new_parking(req: &CreateParkingRequest) -> Result<NewParking, String> {
    let (Some(address), Some(count_places)) = (present(req.address.as_deref()), req.count_places)
    else {
        return Err(MISSING_REQUIRED_FIELDS.to_string());
    };

    validate_length("address", address, MAX_ADDRESS_LEN)?;
    if count_places < 0 {
        return Err("count_places must not be negative".to_string());
    }

    Ok(NewParking {
        address: address.to_string(),
        opened: req.opened.unwrap_or(true),
        count_places,
    })
}

/// Both ids must be present and positive
pub fn validate_session_ids(req: &ClientParkingRequest) -> Result<(i64, i64), String> {
    match (req.client_id, req.parking_id) {
        (Some(client_id), Some(parking_id)) if client_id > 0 && parking_id > 0 => {
            Ok((client_id, parking_id))
        }
        _ => Err(MISSING_SESSION_IDS.to_string()),
    }
}

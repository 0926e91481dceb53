use custom_error::custom_error;

custom_error! {pub GIFWriterError
    ValidationError {description: String} = "Invalid input: {description}",
    CapacityError {description: String} = "Capacity exceeded: {description}",
    InvalidOptions {description: String} = "Invalid options are set for this write operation: {description}",
}

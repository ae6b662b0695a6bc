mod distances;
mod remoteness;

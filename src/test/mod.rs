mod yahoo;
